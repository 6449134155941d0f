#![allow(clippy::unwrap_used, reason = "test fixtures")]

use chart_number::{CssShorthand, Edges, ParseError, normalize_css_array, parse_css_array};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scalar_fills_all_sides() {
    init_logger();
    assert_eq!(normalize_css_array(5.0), vec![5.0; 4]);
    assert_eq!(normalize_css_array(5), vec![5.0; 4]);
}

#[test]
fn pair_is_vertical_then_horizontal() {
    init_logger();
    assert_eq!(normalize_css_array([4.0, 2.0]), vec![4.0, 2.0, 4.0, 2.0]);
}

#[test]
fn triple_is_top_horizontal_bottom() {
    init_logger();
    assert_eq!(
        normalize_css_array([4.0, 3.0, 2.0]),
        vec![4.0, 3.0, 2.0, 3.0]
    );
}

#[test]
fn four_values_are_unchanged() {
    init_logger();
    assert_eq!(
        normalize_css_array([1.0, 2.0, 3.0, 4.0]),
        vec![1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn other_lengths_pass_through() {
    init_logger();
    assert_eq!(normalize_css_array(Vec::<f64>::new()), Vec::<f64>::new());
    assert_eq!(normalize_css_array([7.0]), vec![7.0]);
    assert_eq!(
        normalize_css_array([1.0, 2.0, 3.0, 4.0, 5.0]),
        vec![1.0, 2.0, 3.0, 4.0, 5.0]
    );
}

#[test]
fn normalized_output_is_a_fixed_point() {
    init_logger();
    let inputs: Vec<CssShorthand> = vec![
        CssShorthand::Scalar(9.0),
        [4.0, 2.0].into(),
        [4.0, 3.0, 2.0].into(),
        [1.0, 2.0, 3.0, 4.0].into(),
    ];
    for input in inputs {
        let once = input.normalize();
        let twice = normalize_css_array(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn slices_are_accepted() {
    init_logger();
    let padding = [10.0, 20.0];
    assert_eq!(
        normalize_css_array(&padding[..]),
        vec![10.0, 20.0, 10.0, 20.0]
    );
}

#[test]
fn edges_name_the_sides() {
    init_logger();
    let edges = Edges::from_shorthand([4.0, 3.0, 2.0]).unwrap();
    assert_eq!(
        edges,
        Edges {
            top: 4.0,
            right: 3.0,
            bottom: 2.0,
            left: 3.0,
        }
    );
    assert_eq!(edges.to_array(), [4.0, 3.0, 2.0, 3.0]);
    assert_eq!(Edges::from_shorthand([1.0]), None);
    assert_eq!(Edges::from_normalized(&[1.0, 2.0, 3.0, 4.0, 5.0]), None);
}

#[test]
fn parses_shorthand_strings() {
    init_logger();
    assert_eq!(parse_css_array("8"), Ok(CssShorthand::Scalar(8.0)));
    assert_eq!(
        parse_css_array(" 4px 2 "),
        Ok(CssShorthand::Sequence(vec![4.0, 2.0]))
    );
    assert_eq!(
        parse_css_array("0.1 -3PX 2.5px"),
        Ok(CssShorthand::Sequence(vec![0.1, -3.0, 2.5]))
    );
    assert_eq!(
        parse_css_array("4 3 2 1").unwrap().normalize(),
        vec![4.0, 3.0, 2.0, 1.0]
    );
}

#[test]
fn rejects_unsupported_shorthand_strings() {
    init_logger();
    assert_eq!(parse_css_array(""), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_css_array("   "), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_css_array("4em"), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_css_array("50%"), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_css_array("4 auto"), Err(ParseError::UnexpectedToken));
}

#[test]
fn deserializes_numbers_and_arrays() {
    init_logger();
    let scalar: CssShorthand = serde_json::from_str("5").unwrap();
    assert_eq!(scalar, CssShorthand::Scalar(5.0));
    let pair: CssShorthand = serde_json::from_str("[5, 10]").unwrap();
    assert_eq!(pair.normalize(), vec![5.0, 10.0, 5.0, 10.0]);
    assert!(serde_json::from_str::<CssShorthand>(r#""5 10""#).is_err());

    let edges: Edges =
        serde_json::from_str(r#"{"top": 1, "right": 2, "bottom": 3, "left": 4}"#).unwrap();
    assert_eq!(edges.to_array(), [1.0, 2.0, 3.0, 4.0]);
}
