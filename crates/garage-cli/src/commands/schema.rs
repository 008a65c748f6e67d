//! Schema command

use crate::AppContext;

pub fn run(ctx: &AppContext) {
    print!("{}", ctx.schema().sdl());
}
