//! The fixed set of variables a resolution produces

/// Naming scheme for the library dependency and relocation lists
///
/// Two generations of mod templates exist: newer ones shade libraries and
/// read `SHADOW`/`RELOCATE`, older ones read `MOD_DEPENDENCIES`/`RELOCATION`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariableDialect {
    #[default]
    Shadow,
    Legacy,
}

/// Every variable in a resolved table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Package,
    PackagePath,
    Class,
    Name,
    Id,
    Version,
    LoaderVersion,
    Minecraft,
    Loader,
    LibRepos,
    LibDependencies,
    LibRelocations,
    UmcApi,
    UmcApiNext,
    UmcVersion,
    UmcRepo,
    UmcDependency,
    UmcFile,
    UmcDownload,
    ForgeStringDependencies,
    ForgeTomlDependencies,
}

impl Variable {
    /// Variables every table must contain
    pub const REQUIRED: [Variable; 19] = [
        Variable::Package,
        Variable::PackagePath,
        Variable::Class,
        Variable::Name,
        Variable::Id,
        Variable::Version,
        Variable::LoaderVersion,
        Variable::Minecraft,
        Variable::Loader,
        Variable::LibRepos,
        Variable::LibDependencies,
        Variable::LibRelocations,
        Variable::UmcApi,
        Variable::UmcApiNext,
        Variable::UmcVersion,
        Variable::UmcRepo,
        Variable::UmcDependency,
        Variable::ForgeStringDependencies,
        Variable::ForgeTomlDependencies,
    ];

    /// Where the core library jar comes from; a table holds exactly one of these
    pub const ARTIFACT_SOURCE: [Variable; 2] = [Variable::UmcFile, Variable::UmcDownload];

    /// Key the variable is published under
    pub fn name(self, dialect: VariableDialect) -> &'static str {
        match (self, dialect) {
            (Variable::Package, _) => "PACKAGE",
            (Variable::PackagePath, _) => "PACKAGEPATH",
            (Variable::Class, _) => "CLASS",
            (Variable::Name, _) => "NAME",
            (Variable::Id, _) => "ID",
            (Variable::Version, _) => "VERSION",
            (Variable::LoaderVersion, _) => "LOADER_VERSION",
            (Variable::Minecraft, _) => "MINECRAFT",
            (Variable::Loader, _) => "LOADER",
            (Variable::LibRepos, _) => "LIB_REPOS",
            (Variable::LibDependencies, VariableDialect::Shadow) => "SHADOW",
            (Variable::LibDependencies, VariableDialect::Legacy) => "MOD_DEPENDENCIES",
            (Variable::LibRelocations, VariableDialect::Shadow) => "RELOCATE",
            (Variable::LibRelocations, VariableDialect::Legacy) => "RELOCATION",
            (Variable::UmcApi, _) => "UMC_API",
            (Variable::UmcApiNext, _) => "UMC_API_NEXT",
            (Variable::UmcVersion, _) => "UMC_VERSION",
            (Variable::UmcRepo, _) => "UMC_REPO",
            (Variable::UmcDependency, _) => "UMC_DEPENDENCY",
            (Variable::UmcFile, _) => "UMC_FILE",
            (Variable::UmcDownload, _) => "UMC_DOWNLOAD",
            (Variable::ForgeStringDependencies, _) => "FORGE_STRING_DEPENDENCIES",
            (Variable::ForgeTomlDependencies, _) => "FORGE_TOML_DEPENDENCIES",
        }
    }
}
