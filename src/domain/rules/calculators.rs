//! Fixed offset tables for the leaping pieces, in `(vertical, horizontal)`
//! form as consumed by `Position::shift`.

use crate::domain::coordinate::Direction;

pub type Offset = (i8, i8);

/// Horse leap: the orthogonal square that must be empty, then the landing square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorsePath {
    pub block: Offset,
    pub land: Offset,
}

/// Elephant leap: two squares that must be empty, then the landing square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElephantPath {
    pub block: Offset,
    pub diagonal: Offset,
    pub land: Offset,
}

fn diagonal_continuations(step: Offset) -> [Offset; 2] {
    let (v, h) = step;
    [(v * 2 + h, h * 2 + v), (v * 2 - h, h * 2 - v)]
}

fn extend(offset: Offset) -> Offset {
    let (v, h) = offset;
    (v + v.signum(), h + h.signum())
}

pub fn horse_paths() -> Vec<HorsePath> {
    let mut paths = Vec::with_capacity(8);
    for dir in Direction::ALL {
        let block = dir.offset();
        for land in diagonal_continuations(block) {
            paths.push(HorsePath { block, land });
        }
    }
    paths
}

pub fn elephant_paths() -> Vec<ElephantPath> {
    let mut paths = Vec::with_capacity(8);
    for dir in Direction::ALL {
        let block = dir.offset();
        for diagonal in diagonal_continuations(block) {
            paths.push(ElephantPath {
                block,
                diagonal,
                land: extend(diagonal),
            });
        }
    }
    paths
}
