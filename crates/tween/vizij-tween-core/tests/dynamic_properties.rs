use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use vizij_tween_core::{
    Config, Easing, Property, TweenError, TweenRegistry, UpdateMode, Value, ValueKind,
};

/// Property backed by a named slot in a shared map, the way a scripting host
/// exposes loosely typed fields.
struct Slot {
    store: Rc<RefCell<HashMap<String, Value>>>,
    key: String,
}

impl Slot {
    fn new(store: &Rc<RefCell<HashMap<String, Value>>>, key: &str) -> Self {
        Self {
            store: store.clone(),
            key: key.to_string(),
        }
    }
}

impl Property for Slot {
    fn get(&self) -> Value {
        self.store.borrow()[&self.key].clone()
    }

    fn set(&mut self, value: Value) {
        self.store.borrow_mut().insert(self.key.clone(), value);
    }
}

fn store(entries: &[(&str, Value)]) -> Rc<RefCell<HashMap<String, Value>>> {
    Rc::new(RefCell::new(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    ))
}

#[test]
fn slots_tween_like_typed_accessors() {
    let s = store(&[
        ("pos", Value::Vec2([0.0, 0.0])),
        ("gain", Value::Double(1.0)),
    ]);
    let mut reg = TweenRegistry::default();
    reg.start(Slot::new(&s, "pos"), [4.0f32, 8.0], 2.0, Easing::LINEAR);
    reg.start(
        Slot::new(&s, "gain"),
        0.0f64,
        1.0,
        "quad.out".parse().unwrap(),
    );

    reg.tick(0.5);
    assert_eq!(s.borrow()["pos"], Value::Vec2([1.0, 2.0]));
    assert_eq!(s.borrow()["gain"], Value::Double(0.25));
}

#[test]
fn start_from_writes_before_first_tick() {
    let s = store(&[("n", Value::Int(42))]);
    let mut reg = TweenRegistry::default();
    reg.start_from(Slot::new(&s, "n"), 0, 10, 1.0, Easing::LINEAR);
    assert_eq!(s.borrow()["n"], Value::Int(0));
}

#[test]
fn unsupported_slot_fails_alone() {
    let s = store(&[
        ("quat", Value::Vec4([0.0, 0.0, 0.0, 1.0])),
        ("x", Value::Float(0.0)),
    ]);
    let mut reg = TweenRegistry::default();
    let bad = reg.start(
        Slot::new(&s, "quat"),
        Value::Vec4([0.0, 1.0, 0.0, 0.0]),
        1.0,
        Easing::LINEAR,
    );
    let good = reg.start(Slot::new(&s, "x"), 2.0f32, 1.0, Easing::LINEAR);

    let report = reg.tick(0.5);
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0] {
        TweenError::UnsupportedType { id, kind } => {
            assert_eq!(*id, bad.id);
            assert_eq!(*kind, ValueKind::Vec4);
        }
        other => panic!("unexpected failure: {other}"),
    }
    assert_eq!(s.borrow()["quat"], Value::Vec4([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(s.borrow()["x"], Value::Float(1.0));
    assert!(reg.is_active(good.id));
    assert!(!bad.is_complete());
}

#[test]
fn registry_honours_configured_resolution() {
    let cfg =
        Config::from_json_str(r#"{"resolution": 0.1, "update_mode": "fixed_step"}"#).unwrap();
    let s = store(&[("on", Value::Bool(false))]);
    let mut reg = TweenRegistry::new(cfg).unwrap();
    assert_eq!(reg.update_mode(), UpdateMode::FixedStep);

    reg.start(Slot::new(&s, "on"), true, 1.0, Easing::LINEAR);
    reg.tick(0.85);
    assert_eq!(s.borrow()["on"], Value::Bool(false));
    let report = reg.tick(0.95);
    assert_eq!(report.completed.len(), 1);
    assert_eq!(s.borrow()["on"], Value::Bool(true));
}
