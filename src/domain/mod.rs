// Domain layer: 郵遞區號範圍的模型與對外介面（ports）。

pub mod model;
pub mod ports;
