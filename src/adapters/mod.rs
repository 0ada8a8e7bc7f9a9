// Adapters layer: 對外部系統（HTTP、翻譯）的具體實作。

pub mod http;
pub mod translation;
