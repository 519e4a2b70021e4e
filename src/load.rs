use std::fs;
use std::io::BufReader;
use matfile::{Array, MatFile, NumericData};
use crate::error::MatsinkError;
use crate::model::DecodedFile;

// Positions of the variables among the container's data entries, counted in
// encounter order. The recorder always writes the sample matrix first and the
// rotation speed third.
const SAMPLES_VAR_INDEX: usize = 0;
const SPEED_VAR_INDEX: usize = 2;
const MIN_VARIABLES: usize = 3;

/// Parses a MAT 5 container and extracts the sample vector and the rotation
/// speed. Variables are looked up by name when names are given, otherwise by
/// their position among the data entries.
pub fn load_mat(
    path: &str,
    samples_var: Option<&str>,
    speed_var: Option<&str>,
) -> Result<DecodedFile, MatsinkError> {

    let file = fs::File::open(path)?;
    let mat = MatFile::parse(BufReader::new(file))
        .map_err(|e| MatsinkError::MatParseError(e.to_string()))?;

    let samples_array = select_array(&mat, samples_var, SAMPLES_VAR_INDEX)?;
    let speed_array = select_array(&mat, speed_var, SPEED_VAR_INDEX)?;

    let samples = first_column(samples_array)?;
    let speed = first_scalar(speed_array)?;

    Ok(DecodedFile { samples, speed })

}

fn select_array<'a>(
    mat: &'a MatFile,
    name: Option<&str>,
    index: usize,
) -> Result<&'a Array, MatsinkError> {
    match name {
        Some(n) => mat
            .find_by_name(n)
            .ok_or_else(|| MatsinkError::VariableNotFound(n.to_owned())),
        None => {
            let arrays = mat.arrays();
            if arrays.len() < MIN_VARIABLES {
                return Err(MatsinkError::TooFewVariables(arrays.len()));
            }
            Ok(&arrays[index])
        }
    }
}

// First column of a 2D matrix, in row order. MAT data is stored column-major,
// so the first column is the first `rows` stored elements.
fn first_column(array: &Array) -> Result<Vec<f64>, MatsinkError> {
    let values = to_f64(array.data());
    if values.is_empty() {
        return Err(MatsinkError::EmptyVariable(array.name().to_owned()));
    }
    let rows = array.size().first().copied().unwrap_or(values.len());
    Ok(values.into_iter().take(rows).collect())
}

// First stored element, coerced to an integer.
fn first_scalar(array: &Array) -> Result<i64, MatsinkError> {
    to_f64(array.data())
        .first()
        .map(|v| *v as i64)
        .ok_or_else(|| MatsinkError::EmptyVariable(array.name().to_owned()))
}

// Widen any numeric MAT class to f64.
fn to_f64(data: &NumericData) -> Vec<f64> {
    match data {
        NumericData::Double { real, .. } => real.clone(),
        NumericData::Single { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::Int8 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::UInt8 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::Int16 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::UInt16 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::Int32 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::UInt32 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::Int64 { real, .. } => real.iter().map(|v| *v as f64).collect(),
        NumericData::UInt64 { real, .. } => real.iter().map(|v| *v as f64).collect(),
    }
}
