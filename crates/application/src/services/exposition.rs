use ns1_exporter_domain::{Entity, METRIC_NAME};

/// Content type served with the exposition body.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Render entities into the text exposition format.
///
/// Entities without a sample contribute nothing. Output order follows the
/// iterator, lines are `\n`-separated with no trailing newline.
pub fn render_exposition<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> String {
    let mut lines = vec![format!("# TYPE {} gauge", METRIC_NAME)];
    lines.extend(
        entities
            .into_iter()
            .map(Entity::render)
            .filter(|line| !line.is_empty()),
    );
    lines.push("# EOF".to_string());
    lines.join("\n")
}
