// Domain layer: the person record itself. Only std and serde here.

pub mod model;

pub use model::PersonInfo;
