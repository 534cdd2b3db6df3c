//! The emitted layout document.
//!
//! The CLI owns its wire format: the engine's [`Layout`] is mapped into
//! plain serializable structs here. Unit-cell coordinates pass through a
//! uniform scale transform, and each parent-child edge can optionally be
//! emitted as a Hermite-sampled polyline for smooth link rendering.

use serde::Serialize;

use arbor::{Layout, curve::Hermite, transform::Matrix4};

use crate::{config::OutputConfig, error::CliError};

/// The complete output document.
#[derive(Debug, Serialize)]
pub struct LayoutDocument {
    pub root: String,
    pub size: f32,
    pub deep: usize,
    pub nodes: Vec<NodeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkEntry>>,
}

/// One positioned node.
#[derive(Debug, Serialize)]
pub struct NodeEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub left: f32,
    pub top: f32,
}

/// A sampled link path from a parent to one of its children.
#[derive(Debug, Serialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
    pub points: Vec<[f32; 2]>,
}

/// Encodes `layout` as a JSON string per the output configuration.
pub fn render<R>(
    layout: &Layout<'_, R>,
    config: &OutputConfig,
    links: bool,
) -> Result<String, CliError> {
    let document = document(layout, config, links);
    let encoded = if config.pretty() {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    encoded.map_err(CliError::Encode)
}

fn document<R>(layout: &Layout<'_, R>, config: &OutputConfig, links: bool) -> LayoutDocument {
    let matrix = Matrix4::identity().scale(config.scale(), config.scale(), 1.0);

    let nodes = layout
        .nodes()
        .map(|node| {
            let position = matrix.apply_point(node.position());
            NodeEntry {
                id: node.id().resolve(),
                parent: node.parent_id().map(|id| id.resolve()),
                children: node.children().iter().map(|id| id.resolve()).collect(),
                left: position.x(),
                top: position.y(),
            }
        })
        .collect();

    LayoutDocument {
        root: layout.root_id().resolve(),
        size: layout.size() * config.scale(),
        deep: layout.deep(),
        nodes,
        links: links.then(|| link_entries(layout, config, &matrix)),
    }
}

fn link_entries<R>(
    layout: &Layout<'_, R>,
    config: &OutputConfig,
    matrix: &Matrix4,
) -> Vec<LinkEntry> {
    let hermite = Hermite::new();

    layout
        .edges()
        .map(|(source, target)| {
            let parent = layout.node(source).expect("edge endpoints are in the table");
            let child = layout.node(target).expect("edge endpoints are in the table");

            let curve = hermite
                .fit(
                    parent.left(),
                    parent.top(),
                    child.left(),
                    child.top(),
                    0.0,
                    0.0,
                )
                .expect("a child sits exactly one level right of its parent");

            let points = curve
                .sample(config.link_samples())
                .into_iter()
                .map(|point| {
                    let point = matrix.apply_point(point);
                    [point.x(), point.y()]
                })
                .collect();

            LinkEntry {
                source: source.resolve(),
                target: target.resolve(),
                points,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{self, NestedNode};

    fn sample_tree() -> NestedNode {
        serde_json::from_str(
            r#"{"id": "root", "children": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_document_carries_scaled_positions() {
        let tree = sample_tree();
        let layout = input::nested_engine().unwrap().layout(&tree).unwrap();

        let config: crate::config::AppConfig = toml::from_str(
            r#"
            [output]
            scale = 10.0
            "#,
        )
        .unwrap();
        let document = document(&layout, config.output(), false);

        assert_eq!(document.root, "root");
        assert_eq!(document.deep, 2);
        assert_eq!(document.size, 30.0);
        assert!(document.links.is_none());

        let root = document
            .nodes
            .iter()
            .find(|entry| entry.id == "root")
            .unwrap();
        assert_eq!(root.parent, None);
        assert_eq!(root.children, ["a", "b", "c"]);
        assert_eq!((root.left, root.top), (5.0, 15.0));

        let b = document.nodes.iter().find(|entry| entry.id == "b").unwrap();
        assert_eq!(b.parent.as_deref(), Some("root"));
        assert_eq!((b.left, b.top), (15.0, 15.0));
    }

    #[test]
    fn test_links_span_parent_to_child() {
        let tree = sample_tree();
        let layout = input::nested_engine().unwrap().layout(&tree).unwrap();

        let document = document(&layout, &crate::config::OutputConfig::default(), true);
        let links = document.links.expect("links were requested");
        assert_eq!(links.len(), 3);

        let to_c = links
            .iter()
            .find(|link| link.target == "c")
            .expect("edge to c exists");
        assert_eq!(to_c.source, "root");
        assert_eq!(to_c.points.len(), 16);

        let first = to_c.points.first().unwrap();
        let last = to_c.points.last().unwrap();
        assert!((first[0] - 0.5).abs() < 1e-4 && (first[1] - 1.5).abs() < 1e-4);
        assert!((last[0] - 1.5).abs() < 1e-4 && (last[1] - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_render_honors_pretty() {
        let tree = sample_tree();
        let layout = input::nested_engine().unwrap().layout(&tree).unwrap();

        let compact = render(&layout, &crate::config::OutputConfig::default(), false).unwrap();
        assert!(!compact.contains('\n'));

        let config: crate::config::AppConfig = toml::from_str(
            r#"
            [output]
            pretty = true
            "#,
        )
        .unwrap();
        let pretty = render(&layout, config.output(), false).unwrap();
        assert!(pretty.contains('\n'));
    }
}
