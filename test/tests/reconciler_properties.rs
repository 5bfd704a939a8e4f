/// Property tests driving random child-list edits through the renderer and
/// checking the mirrored host after every render.
use proptest::prelude::*;

use scenewire_server::Element;
use scenewire_shared::{tags, OutboundSignal};
use scenewire_test::{State, TestHost};

#[derive(Clone, Debug)]
struct Row {
    key: Option<String>,
    text: bool,
    label: u8,
}

fn row() -> impl Strategy<Value = Row> {
    (prop::option::of("[a-f]"), any::<bool>(), 0u8..4).prop_map(|(key, text, label)| Row {
        key,
        text,
        label,
    })
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row(), 0..7)
}

fn row_element(row: &Row) -> Element {
    let element = if row.text {
        Element::new(tags::TEXT).text(format!("t{}", row.label))
    } else {
        Element::new(tags::RECT).prop("name", format!("r{}", row.label))
    };
    match &row.key {
        Some(key) => element.key(key.clone()),
        None => element,
    }
}

fn expected_scene(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "canvas".to_string();
    }
    let children: Vec<String> = rows
        .iter()
        .map(|row| {
            if row.text {
                format!("text(children=t{})", row.label)
            } else {
                format!("rect(name=r{})", row.label)
            }
        })
        .collect();
    format!("canvas[{}]", children.join(","))
}

fn created_ids(batches: &[Vec<OutboundSignal>]) -> Vec<u64> {
    batches
        .iter()
        .flatten()
        .filter_map(|signal| match signal {
            OutboundSignal::Create { id, .. } => id.parse().ok(),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn host_tree_follows_every_edit(steps in prop::collection::vec(rows(), 1..8)) {
        let current = State::new(Vec::<Row>::new());
        let app_current = current.clone();
        let mut host = TestHost::new(move || {
            Element::new(tags::CANVAS).children(app_current.with(|rows| {
                rows.iter().map(row_element).collect::<Vec<_>>()
            }))
        });

        for step in &steps {
            current.set(step.clone());
            host.render().unwrap();
            prop_assert_eq!(host.scene(), expected_scene(step));
            prop_assert_eq!(
                host.instance().container().instance_count(),
                host.mirror().len()
            );
            prop_assert_eq!(host.mirror().attached_len(), host.mirror().len());
        }
    }

    #[test]
    fn ids_only_ever_increase(steps in prop::collection::vec(rows(), 1..8)) {
        let current = State::new(Vec::<Row>::new());
        let app_current = current.clone();
        let mut host = TestHost::new(move || {
            Element::new(tags::CANVAS).children(app_current.with(|rows| {
                rows.iter().map(row_element).collect::<Vec<_>>()
            }))
        });

        for (index, step) in steps.iter().enumerate() {
            current.set(step.clone());
            host.render().unwrap();
            if index == steps.len() / 2 {
                host.unmount();
            }
        }

        let ids = created_ids(host.batches());
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "ids {:?}", ids);
    }

    #[test]
    fn keyed_rows_keep_their_instances(keys in Just(vec!["a", "b", "c", "d", "e"]).prop_shuffle()) {
        let current = State::new(vec!["a", "b", "c", "d", "e"]);
        let app_current = current.clone();
        let mut host = TestHost::new(move || {
            Element::new(tags::VERTICAL_LAYOUT).children(
                app_current
                    .get()
                    .into_iter()
                    .map(|key| Element::new(tags::TEXT).key(key).text(key)),
            )
        });

        host.render().unwrap();
        let before = host.find_all(tags::TEXT);

        current.set(keys.clone());
        let reorder = host.render().unwrap();
        let only_moves = reorder
            .iter()
            .all(|signal| matches!(signal, OutboundSignal::SetParent { .. }));
        prop_assert!(only_moves, "reorder emitted more than moves");

        let after = host.find_all(tags::TEXT);
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);

        let labels: Vec<String> = host
            .mirror()
            .children_of("1")
            .iter()
            .filter_map(|id| host.mirror().prop(id, "children").map(str::to_string))
            .collect();
        prop_assert_eq!(labels, keys);
    }
}
