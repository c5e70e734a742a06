// This code is part of Qiskit.
//
// (C) Copyright IBM 2025
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use hashbrown::HashSet;
use itertools::Itertools;
use tracing::debug;

use crate::circuit_data::CircuitData;
use crate::error::CircuitError;
use crate::operations::{Operation, OperationType, StandardGate};
use crate::packed_instruction::PackedInstruction;

/// The output format of [draw_circuit].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawTheme {
    /// Unicode box-drawing text.
    #[default]
    Text,
    /// Source for the LaTeX `quantikz` package.
    LatexSource,
}

impl DrawTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LatexSource => "latex_source",
        }
    }
}

impl fmt::Display for DrawTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawTheme {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "latex_source" | "latex" => Ok(Self::LatexSource),
            _ => Err(CircuitError::UnknownTheme(s.to_string())),
        }
    }
}

/// Options controlling how a circuit is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    pub theme: DrawTheme,
    /// Show the `|0>` initial state at the start of every wire.
    pub initial_state: bool,
    /// Decimal places used for float parameters in gate labels.
    pub float_precision: usize,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            theme: DrawTheme::Text,
            initial_state: true,
            float_precision: 2,
        }
    }
}

impl DrawOptions {
    pub fn with_theme(mut self, theme: DrawTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_initial_state(mut self, initial_state: bool) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_float_precision(mut self, float_precision: usize) -> Self {
        self.float_precision = float_precision;
        self
    }
}

/// Render `circuit` as a string in the theme selected by `options`.
///
/// The output depends only on the circuit and the options.
pub fn draw_circuit(circuit: &CircuitData, options: &DrawOptions) -> String {
    if circuit.num_qubits() == 0 {
        return String::new();
    }
    let vis_mat = VisualizationMatrix::from_circuit(circuit);
    debug!(
        theme = %options.theme,
        num_qubits = circuit.num_qubits(),
        num_layers = vis_mat.num_layers(),
        "drawing circuit"
    );
    match options.theme {
        DrawTheme::Text => {
            TextDrawer::from_visualization_matrix(&vis_mat, options).render()
        }
        DrawTheme::LatexSource => {
            LatexDrawer::from_visualization_matrix(&vis_mat, options).render()
        }
    }
}

/// Return a list of layers such that each layer contains a list of instructions whose qubit
/// ranges do not overlap.  Each instruction goes into the earliest layer after every layer that
/// already touches any wire in its (inclusive) range.
fn build_layers(circuit: &CircuitData) -> Vec<Vec<&PackedInstruction>> {
    let mut layers: Vec<Vec<&PackedInstruction>> = Vec::new();
    // The first layer each wire is free in.
    let mut wire_free = vec![0usize; circuit.num_qubits()];

    for inst in circuit.iter() {
        if inst.qubits.is_empty() {
            continue;
        }
        let (minima, maxima) = inst.qubit_range();
        let layer = wire_free[minima..=maxima]
            .iter()
            .copied()
            .max()
            .unwrap_or_default();
        if layer == layers.len() {
            layers.push(Vec::new());
        }
        layers[layer].push(inst);
        wire_free[minima..=maxima]
            .iter_mut()
            .for_each(|free| *free = layer + 1);
    }

    layers
}

/// Enum for representing elements that appear directly on a wire and how they're connected.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
enum ElementOnWire {
    Top,
    Mid,
    Bot,
}

/// Enum for representing elements that appear in a boxed operation.
#[derive(Clone, Debug, PartialEq)]
enum Boxed<'a> {
    Single(&'a PackedInstruction),
    Multi {
        inst: &'a PackedInstruction,
        range: (usize, usize),
    },
}

/// The elements stored in a visualization matrix.  The elements do not directly implement
/// visualization capabilities, but rather carry enough information to enable visualization later
/// on by the actual drawer.
#[derive(Default, Clone, Debug, PartialEq)]
enum VisualizationElement<'a> {
    #[default]
    Empty,
    VerticalLine,
    Control {
        inst: &'a PackedInstruction,
        position: ElementOnWire,
    },
    Boxed(Boxed<'a>),
}

/// A representation of a single column (called here a layer) of a visualization matrix.
#[derive(Clone, Debug)]
struct VisualizationLayer<'a>(Vec<VisualizationElement<'a>>);

impl<'a> Index<usize> for VisualizationLayer<'a> {
    type Output = VisualizationElement<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> VisualizationLayer<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }

    /// Adds the required visualization elements to represent the given instruction.
    fn add_instruction(&mut self, inst: &'a PackedInstruction) {
        let (minima, maxima) = inst.qubit_range();
        let num_ctrl = inst
            .op
            .standard_gate()
            .map_or(0, |gate| gate.num_ctrl_qubits()) as usize;

        if num_ctrl > 0 {
            let (controls, targets) = inst.qubits.split_at(num_ctrl);
            let target_indices: HashSet<usize> = targets.iter().map(|q| q.index()).collect();
            let control_indices: HashSet<usize> = controls.iter().map(|q| q.index()).collect();
            for target in &target_indices {
                self.0[*target] = VisualizationElement::Boxed(Boxed::Single(inst));
            }
            self.add_controls(inst, &control_indices, (minima, maxima));
            self.add_vertical_lines((minima..=maxima).filter(|idx| {
                !control_indices.contains(idx) && !target_indices.contains(idx)
            }));
        } else if inst.qubits.len() == 1 {
            self.0[minima] = VisualizationElement::Boxed(Boxed::Single(inst));
        } else {
            for q in minima..=maxima {
                self.0[q] = VisualizationElement::Boxed(Boxed::Multi {
                    inst,
                    range: (minima, maxima),
                });
            }
        }
    }

    fn add_controls(
        &mut self,
        inst: &'a PackedInstruction,
        controls: &HashSet<usize>,
        range: (usize, usize),
    ) {
        for control in controls {
            let position = if *control == range.0 {
                ElementOnWire::Top
            } else if *control == range.1 {
                ElementOnWire::Bot
            } else {
                ElementOnWire::Mid
            };
            self.0[*control] = VisualizationElement::Control { inst, position };
        }
    }

    fn add_vertical_lines<I>(&mut self, vertical_lines: I)
    where
        I: Iterator<Item = usize>,
    {
        for vline in vertical_lines {
            self.0[vline] = VisualizationElement::VerticalLine;
        }
    }

    /// Whether the element at `ind` needs a connector on its top edge.
    fn connects_above(&self, ind: usize) -> bool {
        ind >= 1
            && matches!(
                self.0[ind - 1],
                VisualizationElement::VerticalLine
                    | VisualizationElement::Control {
                        position: ElementOnWire::Top | ElementOnWire::Mid,
                        ..
                    }
            )
    }

    /// Whether the element at `ind` needs a connector on its bottom edge.
    fn connects_below(&self, ind: usize) -> bool {
        ind + 1 < self.len()
            && matches!(
                self.0[ind + 1],
                VisualizationElement::VerticalLine
                    | VisualizationElement::Control {
                        position: ElementOnWire::Bot | ElementOnWire::Mid,
                        ..
                    }
            )
    }
}

/// A plain, logical 2D representation of a circuit: one layer (column) per group of
/// non-overlapping instructions, one element per qubit in every layer.
#[derive(Debug, Clone)]
struct VisualizationMatrix<'a> {
    layers: Vec<VisualizationLayer<'a>>,
    num_wires: usize,
}

impl<'a> VisualizationMatrix<'a> {
    fn from_circuit(circuit: &'a CircuitData) -> Self {
        let num_wires = circuit.num_qubits();
        let layers = build_layers(circuit)
            .into_iter()
            .map(|insts| {
                let mut layer =
                    VisualizationLayer(vec![VisualizationElement::default(); num_wires]);
                for inst in insts {
                    layer.add_instruction(inst);
                }
                layer
            })
            .collect();
        VisualizationMatrix { layers, num_wires }
    }

    fn num_wires(&self) -> usize {
        self.num_wires
    }

    fn num_layers(&self) -> usize {
        self.layers.len()
    }
}

pub const Q_WIRE: char = '─';
pub const TOP_CON: char = '┴';
pub const BOT_CON: char = '┬';
pub const Q_LEFT_CON: char = '┤';
pub const Q_RIGHT_CON: char = '├';
pub const TOP_LEFT_BOX: char = '┌';
pub const TOP_RIGHT_BOX: char = '┐';
pub const BOT_LEFT_BOX: char = '└';
pub const BOT_RIGHT_BOX: char = '┘';
pub const BULLET: char = '■';
pub const CONNECTING_WIRE: char = '│';
pub const Q_Q_CROSSED_WIRE: char = '┼';

#[derive(Clone, Copy, Debug)]
enum Row {
    Top,
    Mid,
    Bot,
}

/// The three text rows one element occupies on its wire.
#[derive(Clone, Debug)]
struct ElementWire {
    top: String,
    mid: String,
    bot: String,
}

impl ElementWire {
    fn row(&self, row: Row) -> &str {
        match row {
            Row::Top => &self.top,
            Row::Mid => &self.mid,
            Row::Bot => &self.bot,
        }
    }

    fn width(&self) -> usize {
        let top = self.top.chars().count();
        let mid = self.mid.chars().count();
        let bot = self.bot.chars().count();
        top.max(mid).max(bot)
    }

    fn left_pad_string(s: &mut String, pad_char: char, width: usize) {
        let current_width = s.chars().count();
        if current_width < width {
            let pad_str = pad_char.to_string().repeat(width - current_width);
            *s = format!("{}{}", pad_str, s);
        }
    }

    fn pad_string(s: &mut String, pad_char: char, width: usize) {
        let current_width = s.chars().count();
        if current_width < width {
            let pad_size = width - current_width;
            let left_pad = pad_size / 2;
            let right_pad = pad_size - left_pad;
            *s = format!(
                "{}{}{}",
                pad_char.to_string().repeat(left_pad),
                s,
                pad_char.to_string().repeat(right_pad)
            );
        }
    }

    fn pad_wire_left(&mut self, mid_char: char, width: usize) {
        Self::left_pad_string(&mut self.top, ' ', width);
        Self::left_pad_string(&mut self.mid, mid_char, width);
        Self::left_pad_string(&mut self.bot, ' ', width);
    }

    fn pad_wire(&mut self, mid_char: char, width: usize) {
        Self::pad_string(&mut self.top, ' ', width);
        Self::pad_string(&mut self.mid, mid_char, width);
        Self::pad_string(&mut self.bot, ' ', width);
    }
}

fn format_params(inst: &PackedInstruction, precision: usize) -> String {
    inst.params_view()
        .iter()
        .map(|param| format!("{:.*}", precision, param))
        .join(", ")
}

struct TextDrawer {
    wires: Vec<Vec<ElementWire>>,
}

impl TextDrawer {
    fn get_label(inst: &PackedInstruction, precision: usize) -> String {
        let params = format_params(inst, precision);
        match &inst.op {
            OperationType::Standard(StandardGate::CXGate) => " X ".to_string(),
            OperationType::Standard(StandardGate::RYGate) => format!(" RY({}) ", params),
            OperationType::Standard(StandardGate::RZGate) => format!(" RZ({}) ", params),
            OperationType::Gate(gate) => format!(" {} ", gate.label().unwrap_or(gate.name())),
        }
    }

    fn from_visualization_matrix(vis_mat: &VisualizationMatrix, options: &DrawOptions) -> Self {
        let mut wires: Vec<Vec<ElementWire>> = vec![Vec::new(); vis_mat.num_wires()];

        let inputs: Vec<ElementWire> = (0..vis_mat.num_wires())
            .map(|ind| Self::draw_input(ind, options.initial_state))
            .collect();
        Self::push_layer(&mut wires, inputs, true);

        for layer in &vis_mat.layers {
            let layer_wires = (0..layer.len())
                .map(|ind| Self::draw_element(layer, ind, options))
                .collect();
            Self::push_layer(&mut wires, layer_wires, false);
        }

        // Let every wire run on past the last gate.
        let tail = (0..vis_mat.num_wires())
            .map(|_| Self::draw_empty())
            .collect();
        Self::push_layer(&mut wires, tail, false);

        TextDrawer { wires }
    }

    fn push_layer(wires: &mut [Vec<ElementWire>], mut layer: Vec<ElementWire>, is_input: bool) {
        let layer_width = layer.iter().map(ElementWire::width).max().unwrap_or(0);
        for (wire, mut element) in wires.iter_mut().zip(layer.drain(..)) {
            if is_input {
                element.pad_wire_left(' ', layer_width);
            } else {
                element.pad_wire(Q_WIRE, layer_width);
            }
            wire.push(element);
        }
    }

    fn draw_input(ind: usize, initial_state: bool) -> ElementWire {
        let name = if initial_state {
            format!("q_{}: |0>", ind)
        } else {
            format!("q_{}: ", ind)
        };
        let blank = " ".repeat(name.chars().count());
        ElementWire {
            top: blank.clone(),
            mid: name,
            bot: blank,
        }
    }

    fn draw_empty() -> ElementWire {
        ElementWire {
            top: " ".to_string(),
            mid: Q_WIRE.to_string(),
            bot: " ".to_string(),
        }
    }

    fn draw_element(layer: &VisualizationLayer, ind: usize, options: &DrawOptions) -> ElementWire {
        match &layer[ind] {
            VisualizationElement::Empty => Self::draw_empty(),
            VisualizationElement::VerticalLine => ElementWire {
                top: CONNECTING_WIRE.to_string(),
                mid: Q_Q_CROSSED_WIRE.to_string(),
                bot: CONNECTING_WIRE.to_string(),
            },
            VisualizationElement::Control { position, .. } => {
                let top = match position {
                    ElementOnWire::Top => ' ',
                    ElementOnWire::Mid | ElementOnWire::Bot => CONNECTING_WIRE,
                };
                let bot = match position {
                    ElementOnWire::Top | ElementOnWire::Mid => CONNECTING_WIRE,
                    ElementOnWire::Bot => ' ',
                };
                ElementWire {
                    top: format!(" {} ", top),
                    mid: format!("{}{}{}", Q_WIRE, BULLET, Q_WIRE),
                    bot: format!(" {} ", bot),
                }
            }
            VisualizationElement::Boxed(Boxed::Single(inst)) => {
                let label = Self::get_label(inst, options.float_precision);
                let top_con = if layer.connects_above(ind) {
                    TOP_CON
                } else {
                    Q_WIRE
                };
                let bot_con = if layer.connects_below(ind) {
                    BOT_CON
                } else {
                    Q_WIRE
                };
                let label_width = label.chars().count();
                ElementWire {
                    top: Self::box_edge(TOP_LEFT_BOX, top_con, TOP_RIGHT_BOX, label_width),
                    mid: format!("{}{}{}", Q_LEFT_CON, label, Q_RIGHT_CON),
                    bot: Self::box_edge(BOT_LEFT_BOX, bot_con, BOT_RIGHT_BOX, label_width),
                }
            }
            VisualizationElement::Boxed(Boxed::Multi { inst, range }) => {
                let label = Self::get_label(inst, options.float_precision);
                let label_width = label.chars().count();
                let index_width = (inst.qubits.len() - 1).to_string().len();
                let index = inst
                    .qubits
                    .iter()
                    .position(|q| q.index() == ind)
                    .map_or_else(|| " ".repeat(index_width), |pos| pos.to_string());
                let text = if ind == (range.0 + range.1) / 2 {
                    label
                } else {
                    " ".repeat(label_width)
                };
                let mid_section = format!("{:<width$}{}", index, text, width = index_width);
                let section_width = mid_section.chars().count();
                let side = format!(
                    "{}{}{}",
                    CONNECTING_WIRE,
                    " ".repeat(section_width),
                    CONNECTING_WIRE
                );

                let top = if ind == range.0 {
                    let top_con = if layer.connects_above(ind) {
                        TOP_CON
                    } else {
                        Q_WIRE
                    };
                    Self::box_edge(TOP_LEFT_BOX, top_con, TOP_RIGHT_BOX, section_width)
                } else {
                    side.clone()
                };
                let bot = if ind == range.1 {
                    let bot_con = if layer.connects_below(ind) {
                        BOT_CON
                    } else {
                        Q_WIRE
                    };
                    Self::box_edge(BOT_LEFT_BOX, bot_con, BOT_RIGHT_BOX, section_width)
                } else {
                    side
                };
                // Wires crossing the box without being an argument are drawn through it.
                let (left, right) = if inst.qubits.iter().any(|q| q.index() == ind) {
                    (Q_LEFT_CON, Q_RIGHT_CON)
                } else {
                    (CONNECTING_WIRE, CONNECTING_WIRE)
                };
                ElementWire {
                    top,
                    mid: format!("{}{}{}", left, mid_section, right),
                    bot,
                }
            }
        }
    }

    /// A horizontal box edge of `width` inner characters, with `connector` in the middle.
    fn box_edge(left: char, connector: char, right: char, width: usize) -> String {
        let left_len = width.saturating_sub(1) / 2;
        let right_len = width.saturating_sub(left_len + 1);
        format!(
            "{}{}{}{}{}",
            left,
            Q_WIRE.to_string().repeat(left_len),
            connector,
            Q_WIRE.to_string().repeat(right_len),
            right
        )
    }

    fn line(wire: &[ElementWire], row: Row) -> String {
        wire.iter().map(|element| element.row(row)).collect()
    }

    fn render(&self) -> String {
        let num_wires = self.wires.len();
        let mut lines: Vec<String> = Vec::with_capacity(2 * num_wires + 1);
        lines.push(Self::line(&self.wires[0], Row::Top));
        lines.push(Self::line(&self.wires[0], Row::Mid));
        for i in 1..num_wires {
            lines.push(Self::merge_lines(
                &Self::line(&self.wires[i - 1], Row::Bot),
                &Self::line(&self.wires[i], Row::Top),
            ));
            lines.push(Self::line(&self.wires[i], Row::Mid));
        }
        lines.push(Self::line(&self.wires[num_wires - 1], Row::Bot));
        lines.join("\n")
    }

    /// Merge the bottom row of one wire with the top row of the wire below it.
    fn merge_lines(top: &str, bot: &str) -> String {
        top.chars()
            .zip(bot.chars())
            .map(|(topc, botc)| {
                if topc == botc {
                    topc
                } else if topc == ' ' {
                    botc
                } else if botc == ' ' {
                    if topc == Q_Q_CROSSED_WIRE {
                        CONNECTING_WIRE
                    } else {
                        topc
                    }
                } else if topc == BOT_LEFT_BOX && botc == TOP_LEFT_BOX {
                    '├'
                } else if topc == BOT_RIGHT_BOX && botc == TOP_RIGHT_BOX {
                    '┤'
                } else if botc == TOP_LEFT_BOX || botc == TOP_RIGHT_BOX {
                    BOT_CON
                } else if (topc == BOT_LEFT_BOX || topc == BOT_RIGHT_BOX) && botc == Q_WIRE {
                    TOP_CON
                } else if topc == BOT_CON && botc == CONNECTING_WIRE {
                    BOT_CON
                } else {
                    botc
                }
            })
            .collect()
    }
}

struct LatexDrawer {
    rows: Vec<Vec<String>>,
}

impl LatexDrawer {
    fn escape(text: &str) -> String {
        text.replace('_', "\\_")
    }

    fn get_label(inst: &PackedInstruction, precision: usize) -> String {
        let params = format_params(inst, precision);
        match &inst.op {
            OperationType::Standard(StandardGate::CXGate) => "X".to_string(),
            OperationType::Standard(StandardGate::RYGate) => format!("R_y({})", params),
            OperationType::Standard(StandardGate::RZGate) => format!("R_z({})", params),
            OperationType::Gate(gate) => gate
                .latex_label()
                .map(str::to_string)
                .unwrap_or_else(|| format!("\\mathrm{{{}}}", Self::escape(gate.name()))),
        }
    }

    fn from_visualization_matrix(vis_mat: &VisualizationMatrix, options: &DrawOptions) -> Self {
        let mut rows: Vec<Vec<String>> = (0..vis_mat.num_wires())
            .map(|ind| {
                let lstick = if options.initial_state {
                    format!("\\lstick{{q_{{{}}} : \\ket{{0}}}}", ind)
                } else {
                    format!("\\lstick{{q_{{{}}}}}", ind)
                };
                vec![lstick]
            })
            .collect();

        for layer in &vis_mat.layers {
            for (ind, row) in rows.iter_mut().enumerate() {
                row.push(Self::draw_element(layer, ind, options));
            }
        }
        for row in rows.iter_mut() {
            row.push("\\qw".to_string());
        }

        LatexDrawer { rows }
    }

    fn draw_element(layer: &VisualizationLayer, ind: usize, options: &DrawOptions) -> String {
        match &layer[ind] {
            VisualizationElement::Empty | VisualizationElement::VerticalLine => "\\qw".to_string(),
            VisualizationElement::Control { inst, .. } => {
                let target = inst.qubits.last().map_or(ind, |q| q.index());
                format!("\\ctrl{{{}}}", target as isize - ind as isize)
            }
            VisualizationElement::Boxed(Boxed::Single(inst)) => {
                if inst.op.standard_gate() == Some(StandardGate::CXGate) {
                    "\\targ{}".to_string()
                } else {
                    format!("\\gate{{{}}}", Self::get_label(inst, options.float_precision))
                }
            }
            VisualizationElement::Boxed(Boxed::Multi { inst, range }) => {
                if ind == range.0 {
                    format!(
                        "\\gate[{}]{{{}}}",
                        range.1 - range.0 + 1,
                        Self::get_label(inst, options.float_precision)
                    )
                } else {
                    "\\ghost{}".to_string()
                }
            }
        }
    }

    fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("\\begin{quantikz}\n");
        let body = self.rows.iter().map(|row| row.join(" & ")).join(" \\\\\n");
        output.push_str(&body);
        output.push('\n');
        output.push_str("\\end{quantikz}\n");
        output
    }
}
