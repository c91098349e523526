/// Show a blocking browser alert. Falls back to the console when no window
/// is available.
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .map(|window| window.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        web_sys::console::warn_1(&format!("Alert could not be shown: {}", message).into());
    }
}
