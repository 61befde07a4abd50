//! Integration tests for the container public API.

use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use viewsitter::report::MockReporter;
use viewsitter::{Cid, Container, ContainerBuilder, Identified, IndexKey, View, ViewRecord};

/// A model the application owns; views only carry its cid.
struct Model {
    cid: Cid,
}

impl Identified for Model {
    fn cid(&self) -> &Cid {
        &self.cid
    }
}

/// A view that logs what happens to it into a shared journal.
struct JournalView {
    cid: Cid,
    model: Option<Cid>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl View for JournalView {
    fn cid(&self) -> &Cid {
        &self.cid
    }

    fn model(&self) -> Option<&Cid> {
        self.model.as_ref()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Option<Value> {
        match method {
            "close" => {
                self.journal
                    .borrow_mut()
                    .push(format!("{} closed {:?}", self.cid, args));
                Some(Value::Null)
            }
            _ => None,
        }
    }
}

#[test]
fn add_then_find_by_cid_round_trips() {
    let mut container = Container::new();
    let view = ViewRecord::new("v1").with_model("m1");
    container.add(view.clone(), None).unwrap();

    assert_eq!(container.find_by_cid("v1"), Some(&view));
    assert_eq!(container.find_by_cid(&Cid::from("v1")), Some(&view));
}

#[test]
fn lookups_accept_application_models() {
    let model = Model {
        cid: Cid::from("m1"),
    };
    let container = Container::from_views([ViewRecord::new("v1").with_model("m1")]);

    assert_eq!(container.find_by_model(&model).unwrap().cid.as_str(), "v1");
}

#[test]
fn shared_model_points_at_latest_view() {
    let model = Cid::from("m1");
    let container = Container::from_views([
        ViewRecord::new("a").with_model("m1"),
        ViewRecord::new("b").with_model("m1"),
    ]);

    assert_eq!(container.find_by_model(&model).unwrap().cid.as_str(), "b");
    assert_eq!(container.find_by_cid("a").unwrap().cid.as_str(), "a");
    assert_eq!(container.len(), 2);
}

#[test]
fn removal_cleans_only_its_own_custom_entry() {
    let a = ViewRecord::new("a");
    let b = ViewRecord::new("b");
    let mut container = Container::new();
    container.add(a.clone(), Some(IndexKey::from("shared"))).unwrap();
    container.add(b.clone(), Some(IndexKey::from("shared"))).unwrap();

    container.remove(&a);
    assert_eq!(container.find_by_custom(&IndexKey::from("shared")), Some(&b));

    container.remove(&b);
    assert_eq!(container.find_by_custom(&IndexKey::from("shared")), None);
    assert!(container.custom_index().is_empty());
}

#[test]
fn len_tracks_distinct_cids() {
    let mut container = Container::new();
    container.add(ViewRecord::new("a"), None).unwrap();
    container.add(ViewRecord::new("b"), None).unwrap();
    container.add(ViewRecord::new("a"), None).unwrap();
    assert_eq!(container.len(), 2);

    container.remove_by_cid(&Cid::from("a"));
    assert_eq!(container.len(), 1);

    container.remove_by_cid(&Cid::from("a"));
    assert_eq!(container.len(), 1);
}

#[test]
fn broadcast_of_missing_method_has_no_effect() {
    let mut container = Container::from_views([ViewRecord::new("a"), ViewRecord::new("b")]);
    let before: Vec<ViewRecord> = container.iter().cloned().collect();

    container.call("nonexistentMethod", &[]);
    container.apply("nonexistentMethod", vec![json!(1)]);

    let after: Vec<ViewRecord> = container.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn position_zero_can_change_after_remove_and_add() {
    let mut container = Container::from_views([ViewRecord::new("a"), ViewRecord::new("b")]);
    let first = container.find_by_index(0).cloned().unwrap();

    container.remove(&first);
    container.add(ViewRecord::new("c"), None).unwrap();

    assert_eq!(container.find_by_index(0).unwrap().cid.as_str(), "b");
    assert_eq!(container.find_by_index(1).unwrap().cid.as_str(), "c");
}

#[test]
fn seeded_scenario() {
    let v1 = ViewRecord::new("v1")
        .with_model("m1")
        .with_attribute("customIndex", "x");
    let v2 = ViewRecord::new("v2").with_model("m2");

    let mut container = Container::builder()
        .custom_index_property("customIndex")
        .build([v1.clone(), v2.clone()]);

    let m1 = Cid::from("m1");
    assert_eq!(container.len(), 2);
    assert_eq!(container.find_by_model(&m1), Some(&v1));
    assert_eq!(container.find_by_custom(&IndexKey::from("x")), Some(&v1));
    let at_zero = container.find_by_index(0).unwrap();
    assert!(at_zero == &v1 || at_zero == &v2);

    container.remove(&v1);
    assert_eq!(container.len(), 1);
    assert_eq!(container.find_by_model(&m1), None);
    assert_eq!(container.find_by_custom(&IndexKey::from("x")), None);
    assert_eq!(container.find_by_model(&Cid::from("m2")), Some(&v2));
}

#[test]
fn parser_turns_raw_input_into_views() {
    let mock = MockReporter::new();
    let mut container = ContainerBuilder::with_parser(|raw: (&str, &str)| {
        let (cid, model) = raw;
        (!cid.is_empty()).then(|| ViewRecord::new(cid).with_model(model))
    })
    .reporter(mock.clone())
    .build([("a", "m1"), ("", "m2"), ("b", "m2")]);

    assert_eq!(container.len(), 2);
    assert!(container.find_by_model(&Cid::from("m2")).is_some());
    assert_eq!(mock.warnings().len(), 1);

    assert!(container.add(("", "m3"), None).is_err());
    assert_eq!(mock.warnings().len(), 2);
    assert_eq!(container.len(), 2);
}

#[test]
fn failed_add_leaves_indexes_untouched() {
    let mut container = Container::from_views([ViewRecord::new("a").with_model("m1")]);
    let before = container.model_index().clone();

    assert!(container
        .add(ViewRecord::new("").with_model("m1"), Some(IndexKey::from("k")))
        .is_err());

    assert_eq!(container.model_index(), &before);
    assert!(container.custom_index().is_empty());
}

#[test]
fn boxed_views_broadcast_and_collect() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut container: Container<Box<dyn View>> = Container::new();
    container
        .add(
            Box::new(JournalView {
                cid: Cid::from("j1"),
                model: Some(Cid::from("m1")),
                journal: journal.clone(),
            }),
            None,
        )
        .unwrap();
    container
        .add(Box::new(ViewRecord::new("r1")), None)
        .unwrap();

    container.call("close", &[json!("bye")]);
    assert_eq!(journal.borrow().len(), 1);
    assert!(journal.borrow()[0].starts_with("j1 closed"));

    let rendered = container.invoke("render", &[]);
    assert_eq!(rendered, vec![None, Some(json!(1))]);
}

#[test]
fn iterator_adapters_cover_sequence_helpers() {
    let container = Container::from_views([
        ViewRecord::new("a").with_model("m1"),
        ViewRecord::new("b"),
        ViewRecord::new("c").with_model("m3"),
    ]);

    let with_models: Vec<&str> = container
        .iter()
        .filter(|v| v.model.is_some())
        .map(|v| v.cid.as_str())
        .collect();
    assert_eq!(with_models, vec!["a", "c"]);

    let without_models = container.iter().filter(|v| v.model.is_none()).count();
    assert_eq!(without_models, 1);

    assert!(container.iter().any(|v| v.cid.as_str() == "b"));
    assert!(!container.iter().all(|v| v.model.is_some()));
    assert_eq!(
        container.iter().find(|v| v.model.is_some()).map(|v| v.cid.as_str()),
        Some("a")
    );

    let initial: Vec<&str> = container
        .iter()
        .take(container.len() - 1)
        .map(|v| v.cid.as_str())
        .collect();
    assert_eq!(initial, vec!["a", "b"]);

    let without_b: Vec<&ViewRecord> = container
        .iter()
        .filter(|v| v.cid.as_str() != "b")
        .collect();
    assert_eq!(without_b.len(), 2);
}

#[test]
fn seeding_many_views_keeps_every_index() {
    let count = 50_000;
    let container = Container::from_views((0..count).map(|i| {
        ViewRecord::new(format!("v{}", i))
            .with_model(format!("m{}", i))
            .with_collection(format!("c{}", i))
            .with_attribute("customIndex", i64::from(i))
    }));

    assert_eq!(container.len(), count as usize);
    assert_eq!(container.model_index().len(), count as usize);
    assert_eq!(container.collection_index().len(), count as usize);
    assert_eq!(container.custom_index().len(), count as usize);

    let last = container.find_by_custom(&IndexKey::Int(i64::from(count - 1)));
    assert_eq!(last.map(|v| v.cid.as_str()), Some("v49999"));
    assert_eq!(
        container.find_by_model(&Cid::from("m123")).map(|v| v.cid.as_str()),
        Some("v123")
    );
}
