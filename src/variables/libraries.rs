//! Gradle snippets for the libraries a variant ships

use crate::descriptor::{Library, LibrarySource};

/// Rendered `LIB_REPOS`, dependency and relocation lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryDeclarations {
    pub repositories: String,
    pub dependencies: String,
    pub relocations: String,
}

/// Render the libraries that apply to `variant_key`
///
/// One filter decides membership for all three lists, so every list walks the
/// same libraries in declaration order. Flat directories are merged into a
/// single `flatDir` block that precedes the maven repositories.
pub fn render(libraries: &[Library], variant_key: &str) -> LibraryDeclarations {
    let mut flat_dirs = Vec::new();
    let mut repositories = Vec::new();
    let mut dependencies = Vec::new();
    let mut relocations = Vec::new();

    for library in libraries.iter().filter(|l| l.applies_to(variant_key)) {
        match &library.source {
            LibrarySource::Maven {
                repository,
                artifact,
            } => {
                if !repository.is_empty() {
                    repositories.push(format!("\tmaven {{ url = \"{repository}\" }}"));
                }
                dependencies.push(format!("\t{} '{artifact}'", library.declaration));
            }
            LibrarySource::FlatDir {
                directory,
                artifact,
            } => {
                if !directory.is_empty() && !flat_dirs.contains(&directory) {
                    flat_dirs.push(directory);
                }
                dependencies.push(format!("\t{} '{artifact}'", library.declaration));
            }
            LibrarySource::File { path } => {
                dependencies.push(format!("\t{} files('{path}')", library.declaration));
            }
        }

        if let Some(relocation) = &library.relocation {
            relocations.push(format!(
                "\trelocate '{}', '{}'",
                relocation.from, relocation.to
            ));
        }
    }

    if !flat_dirs.is_empty() {
        let dirs = flat_dirs
            .iter()
            .map(|dir| format!("'{dir}'"))
            .collect::<Vec<_>>()
            .join(", ");
        repositories.insert(0, format!("\tflatDir {{\n\t\tdirs {dirs}\n\t}}"));
    }

    LibraryDeclarations {
        repositories: repositories.join("\n"),
        dependencies: dependencies.join("\n"),
        relocations: relocations.join("\n"),
    }
}
