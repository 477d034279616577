use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Reemplaza `path` de forma atómica.
///
/// El contenido se escribe en un temporal con nombre único dentro del mismo
/// directorio (mismo sistema de ficheros) y luego se renombra encima de
/// `path`. Dos escritores concurrentes nunca comparten temporal: gana el
/// último `persist`, y el archivo nunca queda a medio escribir.
pub(crate) fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut tmp = NamedTempFile::new_in(dir)?;
  tmp.write_all(contents.as_bytes())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| e.error)?;

  Ok(())
}
