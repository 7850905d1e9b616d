//! Integration tests for populating registered types.
//!
//! These tests verify that:
//! 1. Nested composites, sequences and maps are filled to depth
//! 2. Unresolvable fields are skipped without failing the object
//! 3. Construction failures and cycles are reported or contained
//! 4. Overrides, field hints and enumerations pick the right generators

use anyhow::Result;
use fabricate_pojo::{
    pojo, pojo_enum, pojo_shape, pojos, Generator, GeneratorError, GeneratorMapping, Layout, Pojo,
    Populator, Untyped,
};
use std::collections::{BTreeSet, HashMap};

/// Initialize logging for tests
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Default, Clone)]
struct Leaf {
    label: String,
    weight: f64,
    created: Option<chrono::DateTime<chrono::Utc>>,
}
pojo!(Leaf { label, weight, created });

#[derive(Debug, Default)]
struct Branch {
    leaf: Leaf,
    tags: Vec<String>,
    ids: BTreeSet<i64>,
}
pojo!(Branch { leaf, tags, ids });

#[derive(Debug, Default)]
struct Tree {
    name: String,
    root: Branch,
    branches: HashMap<String, Branch>,
}
pojo!(Tree { name, root, branches });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Active,
    Suspended,
    Closed,
}
pojo_enum!(Status { Active, Suspended, Closed });

#[derive(Debug, Clone)]
enum Empty {}
pojo_enum!(Empty {});

#[derive(Debug, Default)]
struct Account {
    email: String,
    status: Option<Status>,
    attachments: Vec<Untyped>,
    counter: u32,
}
pojo!(Account { email, status, attachments, counter });

#[derive(Debug, Default)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}
pojo!(Node { value, next });

#[derive(Debug)]
struct Point {
    x: f64,
    y: f64,
    origin: &'static str,
}

impl Pojo for Point {
    fn layout() -> Layout<Self> {
        Layout::new()
            .constructor_with(|(x, y): (f64, f64)| Point {
                x,
                y,
                origin: "arguments",
            })
            .constructor(|| Point {
                x: 0.0,
                y: 0.0,
                origin: "nullary",
            })
    }
}
pojo_shape!(Point);

#[derive(Debug)]
struct Ticket {
    serial: u32,
    note: String,
}

impl Pojo for Ticket {
    fn layout() -> Layout<Self> {
        Layout::new()
            .constructor_with(|serial: u32| Ticket {
                serial,
                note: String::new(),
            })
            .field("note", |t: &mut Ticket, v| t.note = v)
    }
}
pojo_shape!(Ticket);

#[derive(Debug)]
struct Sealed {
    secret: String,
}

impl Pojo for Sealed {
    fn layout() -> Layout<Self> {
        Layout::new().field("secret", |s: &mut Sealed, v| s.secret = v)
    }
}
pojo_shape!(Sealed);

fn assert_leaf(leaf: &Leaf) {
    assert!(!leaf.label.is_empty());
    assert!(leaf.weight > 0.0);
    assert!(leaf.created.is_some());
}

fn assert_branch(branch: &Branch) {
    assert_leaf(&branch.leaf);
    assert!((3..=25).contains(&branch.tags.len()));
    assert!(branch.tags.iter().all(|t| !t.is_empty()));
    assert!((3..=25).contains(&branch.ids.len()));
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_nested_composites_are_fully_populated() -> Result<()> {
    init_logging();
    let generator = pojos::<Tree>()?;

    for _ in 0..20 {
        let tree = generator.get();
        assert!(!tree.name.is_empty());
        assert_branch(&tree.root);

        assert!((3..=25).contains(&tree.branches.len()));
        for (key, branch) in &tree.branches {
            assert!(!key.is_empty());
            assert_branch(branch);
        }
    }

    Ok(())
}

#[test]
fn test_each_draw_is_a_fresh_instance() -> Result<()> {
    let generator = pojos::<Leaf>()?;
    let first = generator.get();
    let second = generator.get();

    assert_ne!(first.label, second.label);
    Ok(())
}

#[test]
fn test_unresolvable_fields_are_skipped() -> Result<()> {
    init_logging();
    let account = pojos::<Account>()?.get();

    assert!(account.attachments.is_empty());
    assert_eq!(account.counter, 0);
    assert_eq!(account.email.matches('@').count(), 1);
    assert!(account.status.is_some());

    Ok(())
}

#[test]
fn test_enum_fields_cover_all_values() -> Result<()> {
    let generator = pojos::<Status>()?;
    let seen: Vec<Status> = generator.take(300);

    for status in [Status::Active, Status::Suspended, Status::Closed] {
        assert!(seen.contains(&status));
    }

    Ok(())
}

#[test]
fn test_enum_without_values() {
    let result = pojos::<Empty>();
    assert!(matches!(result, Err(GeneratorError::NoEnumValues { .. })));
}

#[test]
fn test_self_reference_is_left_unset() -> Result<()> {
    init_logging();
    let node = pojos::<Node>()?.get();

    assert!(node.value > 0);
    assert!(node.next.is_none());
    Ok(())
}

#[test]
fn test_nullary_constructor_is_preferred() -> Result<()> {
    let point = pojos::<Point>()?.get();
    assert_eq!(point.origin, "nullary");
    assert_eq!(point.x, 0.0);
    assert_eq!(point.y, 0.0);
    Ok(())
}

#[test]
fn test_constructor_arguments_are_generated() -> Result<()> {
    let overrides = GeneratorMapping::new().with(Generator::constant(9_001u32));
    let populator = Populator::default().with_overrides(overrides);
    let ticket = populator.generator::<Ticket>()?.get();

    assert_eq!(ticket.serial, 9_001);
    assert!(!ticket.note.is_empty());
    Ok(())
}

#[test]
fn test_unusable_constructor_is_not_instantiable() {
    // u32 has no default generator, so the only constructor cannot be used
    let result = pojos::<Ticket>();
    assert!(matches!(result, Err(GeneratorError::NotInstantiable { .. })));
}

#[test]
fn test_missing_constructor_is_not_instantiable() {
    let err = pojos::<Sealed>().unwrap_err();
    assert!(err.to_string().contains("no constructor registered"));
}

#[test]
fn test_overrides_apply_to_fields_and_roots() -> Result<()> {
    let overrides = GeneratorMapping::new()
        .with(Generator::constant("fixed".to_string()))
        .with(Generator::constant(Leaf {
            label: "stub".to_string(),
            weight: 1.0,
            created: None,
        }));
    let populator = Populator::default().with_overrides(overrides);

    let branch = populator.generator::<Branch>()?.get();
    assert_eq!(branch.leaf.label, "stub");
    assert!(branch.tags.iter().all(|t| t == "fixed"));

    let leaf = populator.generator::<Leaf>()?.get();
    assert_eq!(leaf.label, "stub");
    Ok(())
}

#[test]
fn test_generators_are_shareable_across_threads() -> Result<()> {
    let generator = pojos::<Branch>()?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.take(10))
        })
        .collect();

    for handle in handles {
        let branches = handle.join().expect("thread panicked");
        assert_eq!(branches.len(), 10);
        branches.iter().for_each(assert_branch);
    }

    Ok(())
}
