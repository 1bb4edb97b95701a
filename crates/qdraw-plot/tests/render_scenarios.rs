//! End-to-end rendering scenarios.

use qdraw_ir::{ChannelKind, Circuit, Instruction, QubitId, StandardGate};
use qdraw_plot::figure::{Line, Text};
use qdraw_plot::{DrawConfig, DrawError, Figure, RenderOptions, plot};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn config() -> DrawConfig {
    DrawConfig::builtin().expect("built-in tables parse")
}

/// Wires start one scale unit left of column 0, where the x limit sits at half a unit.
fn wires(figure: &Figure) -> Vec<&Line> {
    figure
        .lines()
        .filter(|l| close(l.y1, l.y2) && close(l.x1, 2.0 * figure.xlim.0))
        .collect()
}

fn boxed_texts(figure: &Figure) -> Vec<&Text> {
    figure.texts().filter(|t| t.boxed.is_some()).collect()
}

fn label_texts(figure: &Figure) -> Vec<&str> {
    figure
        .texts()
        .filter(|t| t.boxed.is_none())
        .map(|t| t.text.as_str())
        .collect()
}

#[test]
fn test_bell_with_measurements() {
    // [H(0), CNOT(0,1), M(0), M(1)] at the default scale of 0.6
    let mut circuit = Circuit::new(2);
    circuit
        .h(QubitId(0))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .measure(QubitId(0))
        .unwrap()
        .measure(QubitId(1))
        .unwrap();

    let figure = plot(&circuit, &RenderOptions::default(), &config()).unwrap();

    // 3 columns: H, CNOT, both measurements
    assert!(close(figure.width, 3.0 * 0.6));
    assert!(close(figure.height, 2.0 * 0.6));
    assert_eq!(wires(&figure).len(), 2);
    assert_eq!(label_texts(&figure), vec!["|q_0⟩", "|q_1⟩"]);

    let boxes = boxed_texts(&figure);
    let h = boxes.iter().find(|t| t.text == "H").expect("H box");
    assert!(close(h.x, 0.0) && close(h.y, 0.6));

    let oplus = figure
        .circles()
        .find(|c| close(c.radius, 0.15))
        .expect("oplus circle");
    assert!(close(oplus.cx, 0.6) && close(oplus.cy, 0.0));

    let control = figure
        .circles()
        .find(|c| close(c.radius, 0.05 * 0.6))
        .expect("control dot");
    assert!(close(control.cx, 0.6) && close(control.cy, 0.6));

    let connector = figure
        .lines()
        .find(|l| close(l.x1, 0.6) && close(l.x2, 0.6) && close(l.y1.min(l.y2), 0.0) && close(l.y1.max(l.y2), 0.6))
        .expect("connector between the wires");
    assert_eq!(connector.color, "k");

    let measures: Vec<_> = boxes.iter().filter(|t| t.text == "M").collect();
    assert_eq!(measures.len(), 2);
    assert!(measures.iter().all(|t| close(t.x, 1.2)));
}

#[test]
fn test_empty_circuit_draws_bare_wires() {
    let circuit = Circuit::new(3);
    let figure = plot(&circuit, &RenderOptions::default(), &config()).unwrap();

    assert_eq!(wires(&figure).len(), 3);
    assert_eq!(figure.circles().count(), 0);
    assert_eq!(figure.rectangles().count(), 0);
    assert!(boxed_texts(&figure).is_empty());
    assert_eq!(label_texts(&figure), vec!["|q_0⟩", "|q_1⟩", "|q_2⟩"]);
    // Square grid: as many columns as wires
    assert!(close(figure.width, figure.height));
}

#[test]
fn test_fused_group_bracket_spans_inner_columns() {
    let mut circuit = Circuit::new(2);
    circuit
        .fuse([
            Instruction::single_qubit_gate(StandardGate::H, QubitId(0)),
            Instruction::single_qubit_gate(StandardGate::X, QubitId(1)),
        ])
        .unwrap();

    // Unclustered: start barrier, H, X, end barrier
    let options = RenderOptions::default().with_scale(1.0).with_clustering(false);
    let figure = plot(&circuit, &options, &config()).unwrap();
    assert!(close(figure.width, 4.0));
    let rects: Vec<_> = figure.rectangles().collect();
    assert_eq!(rects.len(), 1);
    let rect = rects[0];
    assert!(rect.dashed);
    assert!(close(rect.x, 1.0 - 0.3));
    assert!(close(rect.x + rect.width, 2.0 + 0.3));
    assert!(close(rect.y, 0.0 - 0.25));
    assert!(close(rect.y + rect.height, 1.0 + 0.25));

    // Clustered: H and X share the single inner column
    let options = RenderOptions::default().with_scale(1.0);
    let figure = plot(&circuit, &options, &config()).unwrap();
    assert!(close(figure.width, 3.0));
    let rect = figure.rectangles().next().expect("bracket");
    assert!(close(rect.x, 0.7));
    assert!(close(rect.width, 0.6));
}

#[test]
fn test_fused_entropy_marker_is_drawn_and_bracketed() {
    let options = RenderOptions::default().with_scale(1.0);

    let mut marker_only = Circuit::new(2);
    marker_only
        .fuse([Instruction::entanglement_entropy()])
        .unwrap();
    let figure = plot(&marker_only, &options, &config()).unwrap();
    let marks = boxed_texts(&figure).into_iter().filter(|t| t.text == "EE").count();
    assert_eq!(marks, 2);
    assert_eq!(figure.rectangles().count(), 1);
    assert!(close(figure.width, 3.0));

    let mut mixed = Circuit::new(3);
    mixed
        .fuse([
            Instruction::single_qubit_gate(StandardGate::H, QubitId(0)),
            Instruction::entanglement_entropy(),
        ])
        .unwrap();
    let figure = plot(&mixed, &options, &config()).unwrap();
    let rect = figure.rectangles().next().expect("bracket");
    // Spans q_0 (y = 2) down to q_2 (y = 0)
    assert!(close(rect.y, -0.25));
    assert!(close(rect.y + rect.height, 2.25));
    let ys: Vec<f64> = boxed_texts(&figure)
        .into_iter()
        .filter(|t| t.text == "EE")
        .map(|t| t.y)
        .collect();
    assert_eq!(ys.len(), 3);
    assert!(ys.iter().all(|&y| y >= rect.y && y <= rect.y + rect.height));
}

#[test]
fn test_rendering_is_deterministic() {
    let mut circuit = Circuit::qft(4).unwrap();
    circuit
        .channel(ChannelKind::Depolarizing { lam: 0.1 }, [QubitId(0), QubitId(2)])
        .unwrap()
        .entanglement_entropy()
        .unwrap()
        .measure_all()
        .unwrap();

    let options = RenderOptions::default().with_style("quantumspain");
    let first = plot(&circuit, &options, &config()).unwrap();
    let second = plot(&circuit, &options, &config()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn test_named_style_colours_the_figure() {
    let mut circuit = Circuit::new(1);
    circuit.x(QubitId(0)).unwrap();

    let figure = plot(
        &circuit,
        &RenderOptions::default().with_style("garnacha"),
        &config(),
    )
    .unwrap();
    assert_eq!(figure.facecolor, "#5e2129");

    let fallback = plot(
        &circuit,
        &RenderOptions::default().with_style("not-a-style"),
        &config(),
    )
    .unwrap();
    assert_eq!(fallback.facecolor, "w");
}

#[test]
fn test_initial_states_and_hidden_labels() {
    let circuit = Circuit::new(2);
    let options = RenderOptions::default()
        .with_initial_state("q_0", Some("+".into()))
        .with_initial_state("q_1", None);
    let figure = plot(&circuit, &options, &config()).unwrap();
    assert_eq!(label_texts(&figure), vec!["|+⟩", ""]);

    let hidden = plot(&circuit, &RenderOptions::default().with_labels(false), &config()).unwrap();
    assert!(label_texts(&hidden).is_empty());
}

#[test]
fn test_classically_controlled_gate_gets_double_line() {
    let mut circuit = Circuit::new(2);
    circuit
        .measure(QubitId(0))
        .unwrap()
        .cz(QubitId(0), QubitId(1))
        .unwrap();

    let figure = plot(&circuit, &RenderOptions::default().with_scale(1.0), &config()).unwrap();
    let verticals: Vec<_> = figure.lines().filter(|l| close(l.x1, l.x2)).collect();
    assert_eq!(verticals.len(), 2);
    assert!(close(verticals[1].x1 - verticals[0].x1, 0.04));
}

#[test]
fn test_entanglement_entropy_marks_every_wire() {
    let mut circuit = Circuit::new(3);
    circuit.entanglement_entropy().unwrap();
    let figure = plot(&circuit, &RenderOptions::default(), &config()).unwrap();
    let marks = boxed_texts(&figure).into_iter().filter(|t| t.text == "EE").count();
    assert_eq!(marks, 3);
    // One shared column
    assert!(close(figure.width, 0.6));
}

#[test]
fn test_zero_qubit_circuit_is_rejected() {
    let err = plot(&Circuit::new(0), &RenderOptions::default(), &config()).unwrap_err();
    assert!(matches!(err, DrawError::EmptyRegister));
}

#[test]
fn test_svg_output() {
    let circuit = Circuit::ghz(3).unwrap();
    let svg = plot(&circuit, &RenderOptions::default(), &config())
        .unwrap()
        .to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("|q_2⟩"));
    assert!(svg.contains("<circle"));
    assert!(svg.ends_with("</svg>"));
}
