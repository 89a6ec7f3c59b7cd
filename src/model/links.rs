//! Outbound link construction for the hosting sites

const CURSEFORGE_BASE: &str = "https://www.curseforge.com/minecraft/mc-mods";
const MODRINTH_BASE: &str = "https://modrinth.com/mod";

/// The CurseForge links built for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLinks {
    /// Project file listing, filtered to the browsed game version
    pub list: String,
    /// The matched file's own page
    pub file: String,
    /// Direct download of the matched file
    pub download: String,
}

pub fn file_links(slug: &str, file_id: u64, game_version: &str) -> FileLinks {
    let base = format!("{CURSEFORGE_BASE}/{slug}");
    FileLinks {
        list: format!(
            "{base}/files/all?page=1&pageSize=20&version={game_version}&gameVersionTypeId=4&showAlphaFiles=hide"
        ),
        file: format!("{base}/files/{file_id}"),
        download: format!("{base}/download/{file_id}"),
    }
}

/// The Modrinth links built for a row that is mirrored there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtLinks {
    /// Version listing, filtered to the browsed game version
    pub versions: String,
    /// The matched version's own page
    pub version: String,
}

pub fn ext_links(slug: &str, version_id: &str, game_version: &str) -> ExtLinks {
    let base = format!("{MODRINTH_BASE}/{slug}");
    ExtLinks {
        versions: format!("{base}/versions?g={game_version}&l=fabric"),
        version: format!("{base}/version/{version_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_links() {
        let links = file_links("sodium", 5432101, "1.21.5");
        assert_eq!(
            links.list,
            "https://www.curseforge.com/minecraft/mc-mods/sodium/files/all?page=1&pageSize=20&version=1.21.5&gameVersionTypeId=4&showAlphaFiles=hide"
        );
        assert_eq!(
            links.file,
            "https://www.curseforge.com/minecraft/mc-mods/sodium/files/5432101"
        );
        assert_eq!(
            links.download,
            "https://www.curseforge.com/minecraft/mc-mods/sodium/download/5432101"
        );
    }

    #[test]
    fn test_ext_links() {
        let links = ext_links("sodium", "mc4pQxp1", "1.21.5");
        assert_eq!(
            links.versions,
            "https://modrinth.com/mod/sodium/versions?g=1.21.5&l=fabric"
        );
        assert_eq!(
            links.version,
            "https://modrinth.com/mod/sodium/version/mc4pQxp1"
        );
    }
}
