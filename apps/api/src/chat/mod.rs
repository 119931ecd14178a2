// Chat core: session store, widget settings, the turn-cycle state machine,
// the session registry, and the HTTP handlers.

pub mod handlers;
pub mod manager;
pub mod session;
pub mod settings;
pub mod turn_cycle;
