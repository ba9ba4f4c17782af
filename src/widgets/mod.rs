pub mod ruler;

pub use ruler::{
    HostRequests, Phase, RulerStyle, RulerView, RulerWidget, ValueChangeListener, Viewport,
};
