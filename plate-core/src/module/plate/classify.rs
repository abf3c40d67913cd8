///! Desirability grading for plate numbers

use plate_common::DesirabilityLevel;

/// Grade a plate by its digit patterns.
///
/// # Priority
/// 1. Penta: one digit five or more times in a row (`55555`)
/// 2. Quadra: four in a row (`4444`)
/// 3. Triple: three in a row (`333`), or a repeated pair (`44044`, `2233`)
/// 4. Sequential: three or more digits stepping by one (`123`, `9876`)
/// 5. Ordinary
///
/// Rules overlap, so the first match wins.
pub fn classify_level(plate: &str) -> DesirabilityLevel {
    if matches_penta(plate) {
        return DesirabilityLevel::Penta;
    }
    if matches_quadra(plate) {
        return DesirabilityLevel::Quadra;
    }
    if matches_triple(plate) || matches_repeated(plate) {
        return DesirabilityLevel::Triple;
    }
    if matches_incremental(plate) {
        return DesirabilityLevel::Sequential;
    }
    DesirabilityLevel::Ordinary
}

/// 五连号
pub fn matches_penta(plate: &str) -> bool {
    longest_digit_run(plate) >= 5
}

/// 四连号
pub fn matches_quadra(plate: &str) -> bool {
    longest_digit_run(plate) >= 4
}

/// 三连号
pub fn matches_triple(plate: &str) -> bool {
    longest_digit_run(plate) >= 3
}

/// 重复号: a two-digit block seen again later in the same digit field,
/// or two doubled digits back to back.
pub fn matches_repeated(plate: &str) -> bool {
    digit_fields(plate).any(|field| has_repeated_pair(&field) || has_doubled_pairs(&field))
}

/// 递增减: at least three digits each one above (or each one below) the last
pub fn matches_incremental(plate: &str) -> bool {
    digit_fields(plate).any(|field| {
        field.windows(3).any(|w| {
            let first = w[1] as i8 - w[0] as i8;
            let second = w[2] as i8 - w[1] as i8;
            first == second && first.abs() == 1
        })
    })
}

/// Length of the longest run of one repeated digit
pub fn longest_digit_run(plate: &str) -> usize {
    digit_fields(plate)
        .map(|field| {
            field
                .chunk_by(|a, b| a == b)
                .map(|run| run.len())
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// Maximal runs of decimal digits, as digit values
fn digit_fields(plate: &str) -> impl Iterator<Item = Vec<u8>> + '_ {
    plate
        .split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty())
        .map(|field| field.bytes().map(|b| b - b'0').collect())
}

fn has_repeated_pair(field: &[u8]) -> bool {
    let pairs: Vec<&[u8]> = field.windows(2).collect();
    pairs
        .iter()
        .enumerate()
        .any(|(i, pair)| pairs.iter().skip(i + 2).any(|other| other == pair))
}

fn has_doubled_pairs(field: &[u8]) -> bool {
    field.windows(4).any(|w| w[0] == w[1] && w[2] == w[3])
}
