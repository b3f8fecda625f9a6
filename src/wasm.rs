//! WebAssembly bindings.
//!
//! Matrices cross the boundary as nested JS arrays (`number[][]`) and
//! results come back as plain objects `{ tour, total_cost }`. `solveTsp`
//! returns `{ heuristic, exact }`, each `{ result, elapsed_ms }`, timed with
//! `performance.now()`.

use crate::compare::solve_tsp;
use crate::error::TspError;
use crate::exact::ExactSolver;
use crate::generate::{random_matrix, MatrixConfig};
use crate::matrix::CostMatrix;
use crate::nearest::NearestNeighborSolver;
use crate::solver::TourSolver;
use wasm_bindgen::prelude::*;

fn to_js(err: TspError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_request(matrix: JsValue, start: usize) -> Result<CostMatrix, JsValue> {
    let rows: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(matrix)
        .map_err(|e| JsValue::from_str(&format!("Invalid matrix format: {e}")))?;
    let matrix = CostMatrix::from_rows(rows).map_err(to_js)?;
    if !matrix.contains(start) {
        return Err(to_js(TspError::IndexOutOfRange {
            index: start,
            size: matrix.size(),
        }));
    }
    Ok(matrix)
}

fn run<S: TourSolver>(solver: &S, matrix: JsValue, start: usize) -> Result<JsValue, JsValue> {
    let matrix = parse_request(matrix, start)?;
    let result = solver.solve(&matrix, start);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Nearest-neighbor tour of `matrix` from `start`.
#[wasm_bindgen(js_name = nearestNeighbor)]
pub fn nearest_neighbor(matrix: JsValue, start: usize) -> Result<JsValue, JsValue> {
    run(&NearestNeighborSolver, matrix, start)
}

/// Optimal tour of `matrix` from `start` by exhaustive search.
#[wasm_bindgen(js_name = bruteForce)]
pub fn brute_force(matrix: JsValue, start: usize) -> Result<JsValue, JsValue> {
    run(&ExactSolver, matrix, start)
}

/// Timed nearest-neighbor and exact tours of `matrix` from `start`.
#[wasm_bindgen(js_name = solveTsp)]
pub fn solve_tsp_js(matrix: JsValue, start: usize) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(matrix)
        .map_err(|e| JsValue::from_str(&format!("Invalid matrix format: {e}")))?;
    let report = solve_tsp(rows, start).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Random symmetric whole-number matrix with a zero diagonal, as `number[][]`.
#[wasm_bindgen(js_name = randomMatrix)]
pub fn random_matrix_js(size: usize, seed: u64) -> Result<JsValue, JsValue> {
    let matrix = random_matrix(&MatrixConfig::new(size).with_seed(seed)).map_err(to_js)?;
    let rows: Vec<&[f64]> = (0..matrix.size()).map(|i| matrix.row(i)).collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| JsValue::from_str(&e.to_string()))
}
