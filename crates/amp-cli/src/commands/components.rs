//! Components command: registered components in composition order

use std::io::Write;

use super::platform_driver;
use crate::Result;

pub fn run(out: &mut impl Write) -> Result<()> {
    for name in platform_driver(None)?.component_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_composition_order() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "globals\nzync\nzync-cron\n");
    }
}
