pub struct RedisKey;

impl RedisKey {
    pub fn notification_pref(namespace: &str, device_id: &str) -> String {
        format!("{namespace}:notification_prefs:{device_id}")
    }
}
