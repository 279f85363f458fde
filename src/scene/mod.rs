//! 场景节点模型：编译产物中的节点树与附加行为

mod behavior;
mod node;

pub use behavior::*;
pub use node::{CompiledNode, Constraint, BehaviorConflict, ANCHOR_TOP_LEFT};
