use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use std::sync::Arc;

use crate::{
    db::NotificationStore,
    seasons::{AffirmationPicker, SeasonResolver},
};

#[derive(Clone)]
pub struct AppState {
    pub resolver: SeasonResolver,
    pub notifications: Arc<dyn NotificationStore>,
}

impl AppState {
    pub fn new(resolver: SeasonResolver, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            resolver,
            notifications,
        }
    }

    pub fn picker(&self) -> &AffirmationPicker {
        self.resolver.picker()
    }
}

pub type RedisClient = Pool<RedisConnectionManager>;
