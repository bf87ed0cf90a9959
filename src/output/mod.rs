use std::io::{self, Write};

pub mod global_ip;
pub mod group;
pub mod host;
pub mod tree;

/// Convert a string into a tree label.
fn tree_label<S: Into<String>>(s: S) -> String {
    s.into()
}

/// Print names one per line.
pub fn print_names<'a, W, I>(w: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        writeln!(w, "{}", name)?;
    }
    Ok(())
}
