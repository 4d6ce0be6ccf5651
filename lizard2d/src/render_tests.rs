use crate::{
    Color, DrawList, DrawStyle, FOOT_SHADE, LEG_SHADE, Layer, Lizard, LizardConfig, Vec2,
    append_draw_list, append_draw_list_with_style, build_draw_list,
};

fn spawn(config: LizardConfig) -> Lizard {
    Lizard::spawn(config, Vec2::new(400.0, 300.0)).unwrap()
}

fn layer_colors(list: &DrawList, layer: Layer) -> Vec<[f32; 4]> {
    let draw = list.draws.iter().find(|d| d.layer == layer).unwrap();
    list.indices[draw.first_index..draw.first_index + draw.index_count]
        .iter()
        .map(|&i| list.vertices[i as usize].color)
        .collect()
}

#[test]
fn layers_are_drawn_in_painter_order() {
    let list = build_draw_list(&spawn(LizardConfig::default()));
    let layers: Vec<_> = list.draws.iter().map(|d| d.layer).collect();
    assert_eq!(
        layers,
        vec![Layer::Feet, Layer::Legs, Layer::Body, Layer::Markings]
    );

    let mut expected_first = 0;
    for draw in &list.draws {
        assert_eq!(draw.first_index, expected_first);
        assert_eq!(draw.index_count % 3, 0);
        expected_first += draw.index_count;
    }
    assert_eq!(expected_first, list.indices.len());
}

#[test]
fn every_index_points_at_a_vertex() {
    let list = build_draw_list(&spawn(LizardConfig::default()));
    let count = list.vertices.len() as u32;
    assert!(list.indices.iter().all(|&i| i < count));
}

#[test]
fn body_is_a_single_triangulated_fan_of_the_smoothed_outline() {
    let list = build_draw_list(&spawn(LizardConfig::default()));
    let body = list.draws.iter().find(|d| d.layer == Layer::Body).unwrap();
    // 42 outline points, 4 samples per span, n - 2 triangles.
    assert_eq!(body.index_count, (42 * 4 - 2) * 3);

    let feet = &list.draws[0];
    assert_eq!(feet.index_count, 4 * 20 * 3);
}

#[test]
fn layers_use_the_configured_colors() {
    let config = LizardConfig {
        primary_color: Color::from_hex("#65ab8a").unwrap(),
        secondary_color: Color::from_hex("#a3463e").unwrap(),
        ..LizardConfig::default()
    };
    let list = build_draw_list(&spawn(config.clone()));

    let expect = |layer, color: Color| {
        let rgba = color.to_rgba();
        assert!(
            layer_colors(&list, layer).iter().all(|&c| c == rgba),
            "{layer:?}"
        );
    };
    expect(Layer::Feet, config.primary_color.brightness(FOOT_SHADE));
    expect(Layer::Legs, config.primary_color.brightness(LEG_SHADE));
    expect(Layer::Body, config.primary_color);
    expect(Layer::Markings, config.secondary_color);
}

#[test]
fn feet_discs_match_the_foot_radius() {
    let config = LizardConfig {
        scale: 1.5,
        chonk: 2.0,
        ..LizardConfig::default()
    };
    let lizard = spawn(config.clone());
    let list = build_draw_list(&lizard);

    let foot = lizard.feet()[0].position();
    // Hub first, then the rim.
    let hub = Vec2::from(list.vertices[0].position);
    assert_eq!(hub, foot);
    for vertex in &list.vertices[1..=20] {
        let distance = Vec2::from(vertex.position).distance(foot);
        assert!((distance - config.foot_radius()).abs() < 1.0e-3);
    }
}

#[test]
fn append_keeps_earlier_draws_intact() {
    let first = spawn(LizardConfig::default());
    let second = Lizard::spawn(LizardConfig::default(), Vec2::new(100.0, 100.0)).unwrap();

    let mut list = build_draw_list(&first);
    let (vertices, draws) = (list.vertices.len(), list.draws.len());
    append_draw_list(&mut list, &second);

    assert_eq!(list.draws.len(), draws * 2);
    assert_eq!(list.vertices.len(), vertices * 2);
    assert!(list.draws[draws..].iter().all(|d| d.first_index > 0));
    let count = list.vertices.len() as u32;
    assert!(list.indices.iter().all(|&i| i < count));

    list.clear();
    assert!(list.vertices.is_empty() && list.indices.is_empty() && list.draws.is_empty());
}

#[test]
fn coarser_style_emits_fewer_vertices() {
    let lizard = spawn(LizardConfig::default());
    let fine = build_draw_list(&lizard);

    let mut coarse = DrawList::default();
    append_draw_list_with_style(
        &mut coarse,
        &lizard,
        &DrawStyle {
            curve_subdivisions: 1,
            circle_segments: 8,
        },
    );
    assert!(coarse.vertices.len() < fine.vertices.len());
    let body = coarse.draws.iter().find(|d| d.layer == Layer::Body).unwrap();
    assert_eq!(body.index_count, (42 - 2) * 3);
}
