// Copyright (C) 2024 RME contributors
//
// This file is part of RME.
//
// RME is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// RME is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with RME.  If not, see <http://www.gnu.org/licenses/>.


use pretty_assertions::assert_eq;
use rme_commands::{builtin_registry, SandboxEvent, SandboxHost, SandboxState};
use rme_core::{
    CommandSpec, DispatchError, Documentation, InvokeError, ListLength, Registry, SchemaError,
    ValidationError,
};
use rme_data::{Area, BlendMode, MouseButton, MouseState, Point, Tone, Value};

fn setup() -> (Registry, SandboxHost) {
    let state = SandboxState {
        map_id: 3,
        map_name: "Forest".to_string(),
        player: Point::new(4, 4),
        events: vec![SandboxEvent { id: 7, x: 2, y: 3 }],
        mouse: MouseState {
            x: 40,
            y: 40,
            square_x: 1,
            square_y: 1,
            triggered: vec![MouseButton::MouseLeft],
            pressed: vec![MouseButton::MouseLeft, MouseButton::MouseRight],
            ..Default::default()
        },
    };
    (builtin_registry().unwrap(), SandboxHost::new(state))
}

fn invoke(
    registry: &Registry,
    host: &mut SandboxHost,
    name: &str,
    args: Vec<Value>,
) -> Result<Value, InvokeError> {
    registry.invoke(host, name, args)
}

fn validation_failure(error: &InvokeError) -> (&str, &ValidationError) {
    match error.as_dispatch() {
        Some(DispatchError::ArgumentValidation {
            parameter, reason, ..
        }) => (parameter.as_str(), reason),
        _ => panic!("expected a validation failure, got {error}"),
    }
}

#[test]
fn rect_area_round_trip() {
    let (registry, mut host) = setup();

    let area = invoke(
        &registry,
        &mut host,
        "create_rect_area",
        vec![0.into(), 0.into(), 10.into(), 10.into()],
    )
    .unwrap();
    assert_eq!(
        area.downcast_ref::<Area>(),
        Some(&Area::Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 10
        })
    );

    let inside = invoke(
        &registry,
        &mut host,
        "in_area?",
        vec![area.clone(), 9.into(), 0.into()],
    )
    .unwrap();
    assert_eq!(inside, Value::Bool(true));

    let outside = invoke(&registry, &mut host, "in_area?", vec![area, 10.into(), 0.into()]).unwrap();
    assert_eq!(outside, Value::Bool(false));
}

#[test]
fn negative_width_is_refused() {
    let (registry, mut host) = setup();

    let error = invoke(
        &registry,
        &mut host,
        "create_rect_area",
        vec![0.into(), 0.into(), (-1).into(), 10.into()],
    )
    .unwrap_err();
    let (parameter, reason) = validation_failure(&error);
    assert_eq!(parameter, "width");
    assert!(matches!(
        reason,
        ValidationError::RangeViolation { received: -1, .. }
    ));
}

#[test]
fn polygons_need_three_points() {
    let (registry, mut host) = setup();

    let triangle = Value::Array(vec![
        Value::from([0, 0]),
        Value::from([10, 0]),
        Value::from([0, 10]),
    ]);
    let area = invoke(&registry, &mut host, "create_polygon_area", vec![triangle]).unwrap();
    assert_eq!(
        area.downcast_ref::<Area>(),
        Some(&Area::Polygon {
            points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]
        })
    );

    let segment = Value::Array(vec![Value::from([0, 0]), Value::from([10, 0])]);
    let error = invoke(&registry, &mut host, "create_polygon_area", vec![segment]).unwrap_err();
    let (parameter, reason) = validation_failure(&error);
    assert_eq!(parameter, "points");
    assert_eq!(
        reason,
        &ValidationError::ArityMismatch {
            expected: ListLength::AtLeast(3),
            received: 2
        }
    );
}

#[test]
fn area_parameters_reject_plain_lists() {
    let (registry, mut host) = setup();

    let error = invoke(
        &registry,
        &mut host,
        "in_area?",
        vec![Value::from([0, 0, 10, 10]), 1.into(), 1.into()],
    )
    .unwrap_err();
    let (parameter, reason) = validation_failure(&error);
    assert_eq!(parameter, "area");
    assert!(matches!(reason, ValidationError::DomainTypeMismatch { .. }));
}

#[test]
fn picture_move_waits_by_default() {
    let (registry, mut host) = setup();

    invoke(
        &registry,
        &mut host,
        "picture_show",
        vec![1.into(), "sky".into()],
    )
    .unwrap();
    invoke(
        &registry,
        &mut host,
        "picture_move",
        vec![1.into(), 10.into(), 20.into(), 100.into(), 100.into(), 30.into()],
    )
    .unwrap();
    assert_eq!(host.waited, 30);

    let picture = &host.pictures[&1];
    assert_eq!((picture.x, picture.y), (10, 20));
    assert_eq!(picture.opacity, 255);

    invoke(
        &registry,
        &mut host,
        "picture_move",
        vec![
            1.into(),
            0.into(),
            0.into(),
            50.into(),
            50.into(),
            15.into(),
            false.into(),
            128.into(),
            1.into(),
        ],
    )
    .unwrap();
    assert_eq!(host.waited, 30);
    assert_eq!(host.pictures[&1].opacity, 128);
    assert_eq!(host.pictures[&1].blend_type, BlendMode::Add);
}

#[test]
fn moving_a_missing_picture_is_a_handler_error() {
    let (registry, mut host) = setup();

    let error = invoke(
        &registry,
        &mut host,
        "picture_move",
        vec![9.into(), 0.into(), 0.into(), 100.into(), 100.into(), 10.into()],
    )
    .unwrap_err();
    assert!(error.as_handler().is_some());
    assert_eq!(host.waited, 0);
}

#[test]
fn picture_tone_and_erase() {
    let (registry, mut host) = setup();

    for id in 1..=3 {
        invoke(&registry, &mut host, "picture_show", vec![id.into(), "a".into()]).unwrap();
    }
    let tone = invoke(
        &registry,
        &mut host,
        "tone",
        vec![300.into(), 0.into(), (-20).into()],
    )
    .unwrap();
    invoke(
        &registry,
        &mut host,
        "picture_tone",
        vec![2.into(), tone, 20.into(), true.into()],
    )
    .unwrap();
    assert_eq!(host.pictures[&2].tone, Tone::new(255.0, 0.0, -20.0, 0.0));
    assert_eq!(host.waited, 20);

    invoke(&registry, &mut host, "pictures_erase", vec![1.into(), 3.into()]).unwrap();
    assert_eq!(host.pictures.keys().copied().collect::<Vec<_>>(), vec![2]);

    invoke(&registry, &mut host, "pictures_clear", vec![]).unwrap();
    assert!(host.pictures.is_empty());
}

#[test]
fn event_at_distinguishes_events_and_the_player() {
    let (registry, mut host) = setup();

    let at = |host: &mut SandboxHost, x: i32, y: i32| {
        invoke(&registry, host, "event_at", vec![x.into(), y.into()]).unwrap()
    };
    assert_eq!(at(&mut host, 2, 3), Value::Integer(7));
    assert_eq!(at(&mut host, 4, 4), Value::Integer(0));
    assert_eq!(at(&mut host, 5, 5), Value::Integer(-1));

    let old = invoke(&registry, &mut host, "id_at", vec![2.into(), 3.into()]).unwrap();
    assert_eq!(old, Value::Integer(7));

    assert_eq!(
        invoke(&registry, &mut host, "map_name", vec![]).unwrap(),
        Value::from("Forest")
    );
}

#[test]
fn mouse_buttons_default_to_the_left_one() {
    let (registry, mut host) = setup();

    assert_eq!(
        invoke(&registry, &mut host, "mouse_trigger?", vec![]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        invoke(
            &registry,
            &mut host,
            "mouse_trigger?",
            vec![Value::symbol("mouse_right")]
        )
        .unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        invoke(
            &registry,
            &mut host,
            "mouse_press?",
            vec![Value::symbol("mouse_right")]
        )
        .unwrap(),
        Value::Bool(true)
    );

    let error = invoke(
        &registry,
        &mut host,
        "mouse_press?",
        vec![Value::symbol("mouse_nose")],
    )
    .unwrap_err();
    let (parameter, reason) = validation_failure(&error);
    assert_eq!(parameter, "mouse_btn");
    assert!(matches!(reason, ValidationError::UnknownVariant { .. }));
}

#[test]
fn square_area_queries_use_tiles() {
    let (registry, mut host) = setup();

    let area = invoke(
        &registry,
        &mut host,
        "create_circle_area",
        vec![1.into(), 1.into(), 1.into()],
    )
    .unwrap();
    let query = |host: &mut SandboxHost, name: &str| {
        invoke(&registry, host, name, vec![area.clone()]).unwrap()
    };
    assert_eq!(query(&mut host, "mouse_hover_area?"), Value::Bool(false));
    assert_eq!(query(&mut host, "mouse_hover_square_area?"), Value::Bool(true));
    assert_eq!(query(&mut host, "mouse_click_square_area?"), Value::Bool(true));
    assert_eq!(query(&mut host, "mouse_press_square_area?"), Value::Bool(true));
    assert_eq!(query(&mut host, "mouse_release_square_area?"), Value::Bool(false));
}

#[test]
fn standard_arithmetic() {
    let (registry, mut host) = setup();

    assert_eq!(
        invoke(&registry, &mut host, "percent", vec![40.into(), 80.into()]).unwrap(),
        Value::Integer(50)
    );
    assert_eq!(
        invoke(&registry, &mut host, "apply_percent", vec![50.into(), 80.into()]).unwrap(),
        Value::Integer(40)
    );
    assert!(invoke(&registry, &mut host, "percent", vec![1.into(), 0.into()])
        .unwrap_err()
        .as_handler()
        .is_some());

    for _ in 0..20 {
        let value = invoke(&registry, &mut host, "random", vec![5.into(), 2.into()]).unwrap();
        assert!(matches!(value, Value::Integer(2..=5)), "{value}");

        let value = invoke(&registry, &mut host, "random", vec![3.into()]).unwrap();
        assert!(matches!(value, Value::Integer(0..=3)), "{value}");
    }

    invoke(&registry, &mut host, "wait", vec![12.into()]).unwrap();
    assert_eq!(host.waited, 12);
}

#[test]
fn redeclaring_a_builtin_keeps_the_original() {
    let (mut registry, mut host) = setup();
    let before = registry.describe("map_id").cloned();

    let result = registry.declare(CommandSpec::new("map_id", "mapinfo", "", |_, _| {
        Ok(Value::Integer(0))
    }));
    assert_eq!(
        result,
        Err(SchemaError::DuplicateCommandName {
            name: "map_id".to_string()
        })
    );
    assert_eq!(registry.describe("map_id").cloned(), before);
    assert_eq!(
        invoke(&registry, &mut host, "map_id", vec![]).unwrap(),
        Value::Integer(3)
    );
}

#[test]
fn unknown_commands_are_reported() {
    let (registry, mut host) = setup();
    assert!(matches!(
        invoke(&registry, &mut host, "unknown_command_xyz", vec![]),
        Err(InvokeError::Dispatch(DispatchError::UnknownCommand { name })) if name == "unknown_command_xyz"
    ));
}

#[test]
fn describe_is_stable() {
    let (registry, _) = setup();

    let spec = registry.describe("picture_move").unwrap();
    let names: Vec<_> = spec.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "id",
            "x",
            "y",
            "zoom_x",
            "zoom_y",
            "duration",
            "wait_flag",
            "opacity",
            "blend_type",
            "origin"
        ]
    );
    assert_eq!(registry.describe("picture_move"), Some(spec));
    assert_eq!(
        registry.describe("id_at").and_then(|spec| spec.deprecated_since.as_deref()),
        Some("2.0.0")
    );
}

#[test]
fn invoking_leaves_the_schema_untouched() {
    let (registry, mut host) = setup();
    let before = Documentation::from_registry(&registry);

    invoke(&registry, &mut host, "picture_show", vec![1.into(), "sky".into()]).unwrap();
    for duration in [0, 12] {
        invoke(
            &registry,
            &mut host,
            "picture_move",
            vec![1.into(), 5.into(), 5.into(), 100.into(), 100.into(), duration.into()],
        )
        .unwrap();
    }
    invoke(&registry, &mut host, "random", vec![3.into()]).unwrap();
    invoke(&registry, &mut host, "picture_move", vec![1.into()]).unwrap_err();

    assert_eq!(Documentation::from_registry(&registry), before);
    let defaults: Vec<_> = registry
        .describe("picture_move")
        .unwrap()
        .parameters
        .iter()
        .filter_map(|p| p.default.clone())
        .collect();
    assert_eq!(defaults, [Value::Bool(true), Value::Nil, Value::Nil, Value::Nil]);
}

#[test]
fn area_queries_far_from_the_origin_answer() {
    let (registry, mut host) = setup();

    let circle = invoke(
        &registry,
        &mut host,
        "create_circle_area",
        vec![(-1).into(), 0.into(), 1.into()],
    )
    .unwrap();
    let inside = invoke(
        &registry,
        &mut host,
        "in_area?",
        vec![circle, i64::MAX.into(), i64::MIN.into()],
    )
    .unwrap();
    assert_eq!(inside, Value::Bool(false));

    let ellipse = invoke(
        &registry,
        &mut host,
        "create_ellipse_area",
        vec![0.into(), 0.into(), (1_i64 << 33).into(), (1_i64 << 33).into()],
    )
    .unwrap();
    let inside = invoke(&registry, &mut host, "in_area?", vec![ellipse, 0.into(), 0.into()]).unwrap();
    assert_eq!(inside, Value::Bool(true));
}

#[test]
fn every_builtin_category_is_populated() {
    let (registry, _) = setup();
    for category in rme_commands::categories() {
        assert!(
            !registry.list_by_category(&category.id).is_empty(),
            "{} is empty",
            category.id
        );
    }
    assert_eq!(registry.categories().count(), 5);
}

#[test]
fn sandbox_state_reads_from_ron() {
    let state: SandboxState = ron::from_str(
        "(map_name: \"Cave\", player: (x: 1, y: 2), events: [(id: 4, x: 0, y: 0)])",
    )
    .unwrap();
    assert_eq!(state.map_id, 1);
    assert_eq!(state.player, Point::new(1, 2));
    assert_eq!(state.events.len(), 1);
}
