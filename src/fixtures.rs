// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Small CSV scenarios written to disk for tests and demos.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub struct TestPaths {
    pub nodes: PathBuf,
    pub neighbours: PathBuf,
    pub schemes: PathBuf,
}

/// The twelve Dutch provinces.
pub const PROVINCES_CSV: &str = "\
id,name
GR,Groningen
FR,Friesland
DR,Drenthe
OV,Overijssel
FL,Flevoland
GE,Gelderland
UT,Utrecht
NH,Noord-Holland
ZH,Zuid-Holland
ZE,Zeeland
NB,Noord-Brabant
LI,Limburg
";

/// Province borders, listed from both sides.
pub const PROVINCE_NEIGHBOURS_CSV: &str = "\
state,neighbours
GR,\"[FR, DR]\"
FR,\"[GR, DR, OV, FL, NH]\"
DR,\"[GR, FR, OV]\"
OV,\"[FR, DR, FL, GE]\"
FL,\"[FR, OV, GE, UT, NH]\"
GE,\"[OV, FL, UT, ZH, NB, LI]\"
UT,\"[FL, GE, ZH, NH]\"
NH,\"[FR, FL, UT, ZH]\"
ZH,\"[NH, UT, GE, NB, ZE]\"
ZE,\"[ZH, NB]\"
NB,\"[ZE, ZH, GE, LI]\"
LI,\"[NB, GE]\"
";

/// Four transmitter price lists over the seven transmitter types A to G.
pub const TRANSMITTERS_CSV: &str = "\
scheme,token,cost
1,A,12
1,B,26
1,C,27
1,D,30
1,E,37
1,F,39
1,G,41
2,A,19
2,B,20
2,C,21
2,D,23
2,E,36
2,F,37
2,G,38
3,A,16
3,B,17
3,C,31
3,D,33
3,E,36
3,F,56
3,G,57
4,A,3
4,B,34
4,C,36
4,D,39
4,E,41
4,F,43
4,G,58
";

/// Writes the three sources under `dir` with the given contents.
pub fn write_sources(dir: &Path, nodes: &str, neighbours: &str, schemes: &str) -> Result<TestPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let paths = TestPaths {
        nodes: dir.join("nodes.csv"),
        neighbours: dir.join("neighbours.csv"),
        schemes: dir.join("transmitters.csv"),
    };
    fs::write(&paths.nodes, nodes)?;
    fs::write(&paths.neighbours, neighbours)?;
    fs::write(&paths.schemes, schemes)?;
    Ok(paths)
}

/// Provinces, their borders and the four transmitter schemes.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    write_sources(dir, PROVINCES_CSV, PROVINCE_NEIGHBOURS_CSV, TRANSMITTERS_CSV)
}

/// Three nodes in a path `A - B - C`, with a two-token scheme.
pub fn generate_path_scenario(dir: &Path) -> Result<TestPaths> {
    write_sources(
        dir,
        "id,name\nA,Alpha\nB,Bravo\nC,Charlie\n",
        "state,neighbours\nA,\"[B]\"\nB,\"[A, C]\"\nC,\"[B, ]\"\n",
        "scheme,token,cost\n1,1,5\n1,2,7\n",
    )
}
