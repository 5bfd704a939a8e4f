/// End-to-end scenarios: element trees in, signal batches out, checked
/// against a mirrored host.
use scenewire_server::{Element, RenderError};
use scenewire_shared::{
    default_kinds, parse_inbound, stringify_signals, tags, ComponentError, FieldRef,
    InboundSignal, OutboundSignal, PartialVector, PrimitiveKind, PropUpdate,
};
use scenewire_test::{assert_in_sync, assert_quiet, assert_scene, assert_wire, State, TestHost};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn omitted_prop_resets_and_changed_vector_updates() {
    init_logging();
    let step = State::new(0);
    let app_step = step.clone();
    let mut host = TestHost::new(move || {
        if app_step.get() == 0 {
            Element::new(tags::TRANSFORM)
                .prop("active", true)
                .prop("persistent", true)
                .prop("scale", PartialVector::xyz(2.0, 2.0, 2.0))
        } else {
            Element::new(tags::TRANSFORM)
                .prop("persistent", true)
                .prop("scale", PartialVector::xyz(3.0, 3.0, 3.0))
        }
    });

    let mount = host.render().unwrap();
    assert_wire!(
        mount,
        concat!(
            "create+1+transform|",
            "update+1+active=bool=true+persistent=bool=true+scale=float3=[2;2;2]+|",
            "setParent+1+root+$|"
        )
    );

    step.set(1);
    let update = host.render().unwrap();
    assert_eq!(
        update,
        vec![OutboundSignal::Update {
            id: "1".to_string(),
            props: vec![
                PropUpdate::new("active", PrimitiveKind::Bool, None),
                PropUpdate::new("scale", PrimitiveKind::Float3, Some("[3;3;3]")),
            ],
        }]
    );
    assert_eq!(host.mirror().prop("1", "active"), None);
    assert_eq!(host.mirror().prop("1", "scale"), Some("[3;3;3]"));
}

#[test]
fn updates_follow_declaration_order() {
    init_logging();
    let step = State::new(0);
    let app_step = step.clone();
    let mut host = TestHost::new(move || {
        if app_step.get() == 0 {
            Element::new(tags::TRANSFORM)
        } else {
            // set in reverse of declaration order on purpose
            Element::new(tags::TRANSFORM)
                .prop("scale", PartialVector::xyz(3.0, 3.0, 3.0))
                .prop("position", PartialVector::xyz(1.0, 2.0, 43.0))
                .prop("persistent", true)
        }
    });

    let mount = host.render().unwrap();
    assert_wire!(mount, "create+1+transform|setParent+1+root+$|");

    step.set(1);
    let update = host.render().unwrap();
    assert_eq!(
        update,
        vec![OutboundSignal::Update {
            id: "1".to_string(),
            props: vec![
                PropUpdate::new("persistent", PrimitiveKind::Bool, Some("true")),
                PropUpdate::new("position", PrimitiveKind::Float3, Some("[1;2;43]")),
                PropUpdate::new("scale", PrimitiveKind::Float3, Some("[3;3;3]")),
            ],
        }]
    );
}

#[test]
fn single_create_serializes_exactly() {
    let batch = vec![OutboundSignal::Create {
        id: "1".to_string(),
        kind: "transform".to_string(),
    }];
    assert_eq!(stringify_signals(&batch), "create+1+transform|");
}

#[test]
fn event_message_parses() {
    assert_eq!(
        parse_inbound("event+2+click+msg"),
        Some(InboundSignal::event("2", "click", "msg"))
    );
}

#[test]
fn ref_maps_hold_only_output_slots() {
    let kinds = default_kinds();
    assert!(kinds.template(tags::TRANSFORM).refs("1").is_empty());

    let refs = kinds.template(tags::UNLIT_MATERIAL).refs("4");
    assert_eq!(refs.len(), 1);
    assert_eq!(
        refs.get("self"),
        Some(&FieldRef::new(PrimitiveKind::Material, "4", "self"))
    );
}

#[test]
fn nested_hierarchy_mounts_parent_first() {
    init_logging();
    let mut host = TestHost::new(|| {
        Element::new(tags::CANVAS)
            .child(Element::new(tags::RECT).child(Element::new(tags::TEXT).text("Hello world")))
            .child(Element::new(tags::BUTTON))
    });

    let mount = host.render().unwrap();
    assert_wire!(
        mount,
        concat!(
            "create+1+canvas|setParent+1+root+$|",
            "create+2+rect|setParent+2+1+$|",
            "create+3+text|update+3+children=string=Hello%20world+|setParent+3+2+$|",
            "create+4+button|setParent+4+1+$|"
        )
    );
    assert_scene!(host, "canvas[rect[text(children=Hello%20world)],button]");
    assert_in_sync!(host);

    // nothing changed, but the batch still goes out
    let again = host.render().unwrap();
    assert_quiet!(again);
    assert_eq!(host.batches().len(), 2);
}

#[test]
fn several_text_children_join_with_spaces() {
    init_logging();
    let name = State::new("Ada".to_string());
    let app_name = name.clone();
    let mut host = TestHost::new(move || {
        Element::new(tags::TEXT)
            .text("Hello,")
            .text(app_name.get())
    });

    host.render().unwrap();
    assert_eq!(host.mirror().prop("1", "children"), Some("Hello%2C%20Ada"));

    name.set("Grace".to_string());
    let update = host.render().unwrap();
    assert_wire!(update, "update+1+children=string=Hello%2C%20Grace+|");
}

#[test]
fn assets_are_referenced_through_their_outputs() {
    init_logging();
    let material = State::new(None::<FieldRef>);
    let app_material = material.clone();
    let mount_material = material.clone();
    let mut host = TestHost::new(move || {
        let mount_material = mount_material.clone();
        Element::new(tags::TRANSFORM)
            .child(
                Element::new(tags::UNLIT_MATERIAL)
                    .prop("color", PartialVector::rgba(1.0, 0.0, 0.0, 1.0))
                    .on_mount(move |refs| mount_material.set(refs.get("self").cloned())),
            )
            .child(Element::new(tags::MESH_RENDERER).prop_opt("material", app_material.get()))
    });

    host.render().unwrap();
    assert_eq!(
        material.get(),
        Some(FieldRef::new(PrimitiveKind::Material, "2", "self"))
    );
    assert_eq!(host.mirror().prop("3", "material"), Some("2.self"));
}

#[test]
fn unknown_kind_is_fatal_and_emits_nothing() {
    init_logging();
    let mut host = TestHost::new(|| Element::new(tags::CANVAS).child(Element::new("div")));

    let result = host.render();
    assert_eq!(
        result,
        Err(RenderError::UnknownKind(ComponentError::KindNotRegistered {
            kind: "div".to_string()
        }))
    );
    assert!(host.batches().is_empty());
    assert_eq!(host.instance().container().next_id(), 1);
}

#[test]
fn text_outside_the_text_kind_is_fatal() {
    init_logging();
    let mut host = TestHost::new(|| Element::new(tags::RECT).text("loose"));
    assert_eq!(
        host.render(),
        Err(RenderError::IllegalText {
            kind: tags::RECT.to_string()
        })
    );
    assert!(host.mirror().is_empty());
}

#[test]
fn children_under_a_leaf_kind_are_fatal() {
    init_logging();
    let mut host = TestHost::new(|| Element::new(tags::BOX).child(Element::new(tags::TEXT)));
    assert_eq!(
        host.render(),
        Err(RenderError::ChildrenNotAllowed {
            kind: tags::BOX.to_string()
        })
    );
}

#[test]
fn kind_change_replaces_the_instance() {
    init_logging();
    let boxed = State::new(true);
    let app_boxed = boxed.clone();
    let mut host = TestHost::new(move || {
        let child = if app_boxed.get() {
            Element::new(tags::BOX)
        } else {
            Element::new(tags::SPINNER)
        };
        Element::new(tags::TRANSFORM).child(child)
    });

    host.render().unwrap();
    boxed.set(false);
    let swap = host.render().unwrap();
    assert_wire!(swap, "remove+2|create+3+spinner|setParent+3+1+$|");
    assert_scene!(host, "transform[spinner]");
}

#[test]
fn unmount_removes_the_root_and_remount_uses_fresh_ids() {
    init_logging();
    let mut host = TestHost::new(|| Element::new(tags::CANVAS).child(Element::new(tags::RECT)));

    host.render().unwrap();
    let teardown = host.unmount();
    assert_wire!(teardown, "remove+root|");
    assert!(host.mirror().is_empty());
    assert_eq!(host.instance().container().instance_count(), 0);

    let remount = host.render().unwrap();
    assert_wire!(
        remount,
        "create+3+canvas|setParent+3+root+$|create+4+rect|setParent+4+3+$|"
    );
}
