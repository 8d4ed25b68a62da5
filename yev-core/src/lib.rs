#![no_std]
extern crate alloc;
extern crate core;

pub use emitter::{
    analyze_anchor, analyze_scalar, analyze_tag, emit_events, AnchorAnalysis, Emit, Emitter,
    EmitterConfig, LineBreak, ScalarAnalysis, TagAnalysis,
};
pub use tokenizer::{CharsBuffer, EventReader, LookAhead, Parser, Scanner, StrBuffer, Token};

mod emitter;
mod tokenizer;
