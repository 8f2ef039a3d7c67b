//! Sink destination renderer

use super::writer::AttributeWriter;
use crate::models::Destination;

/// Open a `Sink` section describing where events go
///
/// `Name` and `Namespace` are always written, empty when there is no
/// reference. `Resource` needs a reference and `URI` needs a URI; both may
/// appear together.
pub fn write_sink(dw: &mut dyn AttributeWriter, sink: Option<&Destination>) {
    let mut section = dw.section("Sink");
    let reference = sink.and_then(|s| s.reference.as_ref());

    section.write_attribute(
        "Name",
        reference
            .and_then(|r| r.name.as_deref())
            .unwrap_or_default(),
    );
    section.write_attribute(
        "Namespace",
        reference
            .and_then(|r| r.namespace.as_deref())
            .unwrap_or_default(),
    );
    if let Some(reference) = reference {
        section.write_attribute(
            "Resource",
            &format!(
                "{} ({})",
                reference.kind.as_deref().unwrap_or_default(),
                reference.api_version.as_deref().unwrap_or_default()
            ),
        );
    }
    if let Some(uri) = sink.and_then(|s| s.uri.as_deref()) {
        section.write_attribute("URI", uri);
    }
}
