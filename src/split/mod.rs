//! 移動点の値をMulti-Entryインデックス用の複数の時空間ボックスに分割する。

pub mod config;
pub mod extract;
pub mod plan;

#[cfg(test)]
mod tests;
