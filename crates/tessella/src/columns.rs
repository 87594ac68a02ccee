//! Builds the rendered column tree.

use compact_str::format_compact;
use tessella_core::{distribute, LayoutError};

use crate::controller::LayoutConfig;
use crate::node::VNode;
use crate::props::MasonryProps;
use crate::style::{column_style, container_style};

/// Distribute `children` and wrap each bucket in a keyed column element,
/// returning the container element.
///
/// Column keys encode the column index and the bucket count, so a
/// column-count change re-keys every column.
pub fn render_columns(
    props: &MasonryProps,
    config: &LayoutConfig,
    children: &[VNode],
) -> Result<VNode, LayoutError> {
    let buckets = distribute(children, config.columns as usize, props.resolve_slot)?;
    let gutter = config.gutter.css();

    let mut container = VNode::element(props.tag.clone());
    if props.css {
        container.style = container_style(&gutter);
    }

    let bucket_count = buckets.len();
    for (index, bucket) in buckets.into_iter().enumerate() {
        let mut column = VNode::element(props.column_tag.clone())
            .with_key(format_compact!("{index}-{bucket_count}"));
        if !props.column_class.is_empty() {
            column.class = Some(props.column_class.clone());
        }
        column.attrs = props.column_attr.clone();
        if props.css {
            column.style = column_style(config.columns, &gutter);
        }
        column.children = bucket.into_iter().cloned().collect();
        container.children.push(column);
    }

    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::GutterValue;

    fn tiles(count: usize) -> Vec<VNode> {
        (0..count)
            .map(|i| VNode::element("div").with_key(format_compact!("t{i}")))
            .collect()
    }

    fn config(columns: u32) -> LayoutConfig {
        LayoutConfig {
            columns,
            gutter: GutterValue::Px(10.0),
        }
    }

    #[test]
    fn test_container_and_column_shape() {
        let props = MasonryProps::default();
        let tree = render_columns(&props, &config(3), &tiles(6)).unwrap();

        assert_eq!(tree.tag(), Some("div"));
        assert_eq!(tree.children.len(), 3);

        let keys: Vec<_> = tree
            .children
            .iter()
            .map(|column| column.key.as_deref().unwrap())
            .collect();
        assert_eq!(keys, ["0-3", "1-3", "2-3"]);

        let membership: Vec<Vec<_>> = tree
            .children
            .iter()
            .map(|column| {
                column
                    .children
                    .iter()
                    .map(|child| child.key.as_deref().unwrap())
                    .collect()
            })
            .collect();
        assert_eq!(
            membership,
            [vec!["t0", "t3"], vec!["t1", "t4"], vec!["t2", "t5"]]
        );
    }

    #[test]
    fn test_css_flag_gates_styles() {
        let props = MasonryProps::default();
        let tree = render_columns(&props, &config(2), &tiles(2)).unwrap();
        assert!(!tree.style.is_empty());
        assert!(!tree.children[0].style.is_empty());

        let bare = MasonryProps {
            css: false,
            ..MasonryProps::default()
        };
        let tree = render_columns(&bare, &config(2), &tiles(2)).unwrap();
        assert!(tree.style.is_empty());
        assert!(tree.children[0].style.is_empty());
    }

    #[test]
    fn test_column_class_and_attrs() {
        let props = MasonryProps::from_json(
            r#"{"columnTag": "section", "columnClass": "col", "columnAttr": {"role": "list"}}"#,
        )
        .unwrap();
        let tree = render_columns(&props, &config(2), &tiles(2)).unwrap();

        let column = &tree.children[0];
        assert_eq!(column.tag(), Some("section"));
        assert_eq!(column.class.as_deref(), Some("col"));
        assert_eq!(column.attrs.get("role").map(|v| v.as_str()), Some("list"));
    }

    #[test]
    fn test_empty_children_renders_bare_container() {
        let props = MasonryProps::default();
        let tree = render_columns(&props, &config(4), &[]).unwrap();
        assert!(tree.children.is_empty());
    }
}
