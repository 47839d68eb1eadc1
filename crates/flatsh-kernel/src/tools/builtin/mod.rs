//! Builtin tools — one module per shell command.

mod cat;
mod cd;
mod cp;
mod date;
mod echo;
mod help;
mod ls;
mod man;
mod mkdir;
mod mv;
mod pwd;
mod rm;
mod stat;
mod touch;
mod uptime;
mod version;
mod whoami;

use std::sync::Arc;

use super::ToolRegistry;

pub use cat::Cat;
pub use cd::Cd;
pub use cp::Cp;
pub use date::Date;
pub use echo::Echo;
pub use help::Help;
pub use ls::Ls;
pub use man::Man;
pub use mkdir::Mkdir;
pub use mv::Mv;
pub use pwd::Pwd;
pub use rm::Rm;
pub use stat::Stat;
pub use touch::Touch;
pub use uptime::Uptime;
pub use version::Version;
pub use whoami::Whoami;

/// Register every builtin tool.
///
/// `clear` is not a tool: the interpreter intercepts it because it rewrites
/// the scrollback instead of producing a response.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(Arc::new(Help));
    registry.register(Arc::new(Echo));
    registry.register(Arc::new(Pwd));
    registry.register(Arc::new(Ls));
    registry.register(Arc::new(Cd));
    registry.register(Arc::new(Mkdir));
    registry.register(Arc::new(Touch));
    registry.register(Arc::new(Cat));
    registry.register(Arc::new(Mv));
    registry.register(Arc::new(Rm));
    registry.register(Arc::new(Cp));
    registry.register(Arc::new(Stat));
    registry.register(Arc::new(Whoami));
    registry.register(Arc::new(Date));
    registry.register(Arc::new(Uptime));
    registry.register(Arc::new(Version));
    registry.register(Arc::new(Man));
}
