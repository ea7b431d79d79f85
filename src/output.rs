use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dot::to_dot;
use crate::error::Error;
use crate::lexer::{Interner, Token};
use crate::Compilation;

pub fn token_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        let _ = writeln!(out, "{} {} {} {}", t.type_code(), t.value(), t.line, t.column);
    }
    out
}

pub fn table_listing(table: &Interner) -> String {
    let mut out = String::new();
    for (i, text) in table.iter() {
        let _ = writeln!(out, "{}: {}", i, text);
    }
    out
}

pub fn ir_listing<T: std::fmt::Display>(quads: &[T]) -> String {
    let mut out = String::new();
    for q in quads {
        let _ = writeln!(out, "{}", q);
    }
    out
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Error> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|e| Error::FileWrite(path.display().to_string(), e))?;
    info!(path = %path.display(), "wrote artifact");
    Ok(path)
}

/// Writes the listings into `dir`. `ast.dot` and `ir.txt` are only written
/// for a well-formed program.
pub fn write_artifacts(dir: &Path, compilation: &Compilation) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(dir).map_err(|e| Error::CreateDir(dir.display().to_string(), e))?;

    let lexed = &compilation.lexed;
    let mut written = vec![
        write_file(dir, "tokens.txt", &token_listing(&lexed.tokens))?,
        write_file(dir, "identifier_table.txt", &table_listing(&lexed.identifiers))?,
        write_file(dir, "constant_table.txt", &table_listing(&lexed.constants))?,
    ];

    if let Some(ast) = compilation.checked_ast() {
        written.push(write_file(dir, "ast.dot", &to_dot(ast))?);
    }
    if let Some(ir) = &compilation.ir {
        written.push(write_file(dir, "ir.txt", &ir_listing(ir))?);
    }

    Ok(written)
}
