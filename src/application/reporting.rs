use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};

/// Logs a failed user action at warn level and hands back the success value.
pub fn log_failure<T>(component: LogComponent, action: &str, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            get_logger().warn(component, &format!("⚠️ {} failed: {}", action, err));
            None
        }
    }
}
