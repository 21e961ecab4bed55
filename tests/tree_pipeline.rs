// tests/tree_pipeline.rs
use arbor_lsystem::presets::{self, LEAF_MATERIAL, TRUNK_MATERIAL};
use arbor_lsystem::{
    MeshGenerator, StringGenerator, StringLSystem, TreeGenerator, create_cylinder,
    create_unit_quad, parse_symbols,
};
use glam::{Vec2, Vec3};

#[test]
fn test_default_tree_one_iteration() {
    let mut tree = TreeGenerator::default();
    tree.iterations = 1;
    tree.trace = true;

    let output = tree.generate();
    assert_eq!(output.symbols, parse_symbols("F-[[AX]+AX]+AF[+AFAX]-AX"));
    assert_eq!(output.trace.as_deref(), Some("1R[[A0]LA0]LA1[LA1A0]RA0"));

    // Trunk is drawn first, so its group comes first.
    assert_eq!(output.groups.len(), 2);
    assert_eq!(output.groups[0].material, TRUNK_MATERIAL);
    assert_eq!(output.groups[0].instances.len(), 3);
    assert_eq!(output.groups[1].material, LEAF_MATERIAL);
    assert_eq!(output.groups[1].instances.len(), 4);

    // The first trunk segment sits at the origin.
    assert_eq!(output.groups[0].instances[0].position, Vec3::ZERO);
}

#[test]
fn test_trace_is_off_by_default() {
    let tree = TreeGenerator::default();
    assert!(tree.generate().trace.is_none());
}

#[test]
fn test_default_tree_grows_with_iterations() {
    let mut tree = TreeGenerator::default();
    let mut previous = 0;
    for iterations in 1..=4 {
        tree.iterations = iterations;
        let output = tree.generate();
        let instances: usize = output.groups.iter().map(|g| g.instances.len()).sum();
        assert!(instances > previous);
        previous = instances;
    }
}

#[test]
fn test_zero_iterations_draws_axiom() {
    let mut tree = TreeGenerator::default();
    tree.iterations = 0;
    let output = tree.generate();
    assert_eq!(output.symbols, parse_symbols("X"));
    assert_eq!(output.groups.len(), 1);
    assert_eq!(output.groups[0].instances.len(), 1);
}

#[test]
fn test_invalid_grammar_keeps_previous() {
    let mut tree = TreeGenerator::default();
    let before = tree.grammar().clone();

    let bad = StringLSystem::new("X").with_rule("XX", "F");
    assert!(tree.set_grammar(bad).is_err());
    assert_eq!(tree.grammar(), &before);
    assert_eq!(tree.lsystem(), &before.parse().unwrap());

    let good = StringLSystem::new("F").with_rule("F", "FAF");
    tree.set_grammar(good.clone()).unwrap();
    assert_eq!(tree.grammar(), &good);

    tree.iterations = 2;
    let output = tree.generate();
    assert_eq!(output.symbols, parse_symbols("FAFAFAF"));
    let ys: Vec<f32> = output.groups[0].instances.iter().map(|t| t.position.y).collect();
    let step = presets::STEP_LENGTH;
    for (i, y) in ys.iter().enumerate() {
        assert!((y - step * i as f32).abs() < 1e-5, "instance {i} at {y}");
    }
}

#[test]
fn test_new_rejects_invalid_grammar() {
    let result = TreeGenerator::new(
        StringLSystem::new("A").with_rule("", "B"),
        3,
        MeshGenerator::default(),
        StringGenerator::new(),
    );
    assert!(result.is_err());
}

#[test]
fn test_primitive_meshes() {
    let quad = create_unit_quad();
    assert_eq!(quad.vertices.len(), 4);
    assert_eq!(quad.indices.len(), 6);
    assert_eq!(quad.vertices[0].position.truncate(), Vec2::new(-0.5, -0.5));

    let cylinder = create_cylinder(8, 2.0, 0.5);
    assert_eq!(cylinder.vertices.len(), 16);
    assert_eq!(cylinder.triangle_count(), 16);
    assert!(cylinder.indices.iter().all(|&i| (i as usize) < cylinder.vertices.len()));
    assert!(cylinder.vertices.iter().all(|v| (v.position.y.abs() - 1.0).abs() < 1e-6));

    assert!(create_cylinder(2, 1.0, 1.0).is_empty());
}

#[test]
fn test_transform_matrix_places_instance() {
    let mut tree = TreeGenerator::default();
    tree.iterations = 1;
    let output = tree.generate();
    for group in &output.groups {
        for instance in &group.instances {
            let origin = instance.to_matrix().transform_point3(Vec3::ZERO);
            assert!(origin.abs_diff_eq(instance.position, 1e-5));
        }
    }
}
