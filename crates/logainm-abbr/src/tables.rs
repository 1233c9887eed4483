//! Replacement tables — configuration for the abbreviation cascade.
//!
//! Tables are ordered data, not maps: substitution is a sequential cascade
//! over the pairs, so earlier entries win overlapping substrings and later
//! entries act on whatever text earlier ones left behind.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::mutation::MutationTables;

/// Full table set for one abbreviation dialect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbrTables {
    pub adjectives: Vec<(String, String)>,
    pub classifiers: Vec<(String, String)>,
    pub mutations: MutationTables,
}

impl AbbrTables {
    /// Deserialize a table set from JSON and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(raw)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<()> {
        for (table, name) in [
            (&self.adjectives, "adjective"),
            (&self.classifiers, "classifier"),
        ] {
            if table.iter().any(|(full, _)| full.is_empty()) {
                return Err(TableError::EmptyKey { table: name });
            }
        }
        self.mutations.validate()
    }
}

impl Default for AbbrTables {
    fn default() -> Self {
        default_tables()
    }
}

/// The built-in Irish table set.
pub fn default_tables() -> AbbrTables {
    AbbrTables {
        adjectives: pairs(ADJECTIVES),
        classifiers: pairs(CLASSIFIERS),
        mutations: MutationTables {
            clusters4: strs(CLUSTERS_C4),
            clusters3: strs(CLUSTERS_C3),
            clusters2: strs(CLUSTERS_C2),
            vowels2: strs(VOWELS_V2),
        },
    }
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(full, abbr)| (full.to_string(), abbr.to_string()))
        .collect()
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Directional and positional qualifiers, e.g. Thuaidh > Thu.
const ADJECTIVES: &[(&str, &str)] = &[
    ("Thuaidh", "Thu"),
    ("Theas", "The"),
    ("Thoir", "Tho"),
    ("Thiar", "Thi"),
    ("Uachtarach", "Uach"),
    ("Íochtarach", "Íoch"),
];

/// Generic placename elements, e.g. Baile > B. One entry ("Poiblí ")
/// deliberately keeps a trailing space.
const CLASSIFIERS: &[(&str, &str)] = &[
    ("Abhainn", "Abh"),
    ("Achadh", "A"),
    ("Aill", "Aill"),
    ("Áineasa", "Áin"),
    ("Áineas", "Áin"),
    ("Áirse", "Áir"),
    ("An Ceathrú", "An 4ú"),
    ("An Coláiste Ollscoile, Baile Átha Cliath", "COBÁC"),
    ("An Chéad", "An 1ú"),
    ("An Cúigiú", "An 5ú"),
    ("An Dara", "An 2ú"),
    ("An Deichiú", "An 10ú"),
    ("An Naoú", "An 9ú"),
    ("An tOchtú", "An 8ú"),
    ("An Seachtú", "An 7ú"),
    ("An Séú", "An 6ú"),
    ("An Tríú", "An 3ú"),
    ("Árasáin", "Ára"),
    ("Ard-Oifig an Phoist", "AOP"),
    ("Arda", "Arda"),
    ("Ard", "Ard"),
    ("Ardán", "Ardn"),
    ("Ascaill", "Asc"),
    ("Átha", "Á"),
    ("Áth", "Á"),
    ("Bá", "Bá"),
    ("Baile", "B"),
    ("Bailtíní", "Btní"),
    ("Banc", "Bnc"),
    ("Barr", "Brr"),
    ("Beairic", "Brc"),
    ("Béal", "Bl"),
    ("Bealach", "Bch"),
    ("Bearna", "Brn"),
    ("Binn", "Bnn"),
    ("Bóthar", "Br"),
    ("Bruach", "Brch"),
    ("Buaile", "Bu"),
    ("Buirg", "Brg"),
    ("Búlbhard", "Blbhrd"),
    ("Bun", "Bn"),
    ("Caiseal", "Csl"),
    ("Caisleán", "Cais"),
    ("Calafort", "Cal"),
    ("Carn", "Crn"),
    ("Carraig", "Crg"),
    ("Ceanncheathrú", "CC"),
    ("Ceann", "Cnn"),
    ("Ceapach", "Cp"),
    ("Cearnóg", "Crng"),
    ("Ceathrú", "C"),
    ("Cill", "Cill"),
    ("Clochar", "Clchr"),
    ("Clochán", "Clchán"),
    ("Cloch", "Clch"),
    ("Cluain", "Cl"),
    ("Clár", "Clr"),
    ("Clós", "Cls"),
    ("Cnocán", "Cncn"),
    ("Cnoc", "Cn"),
    ("Coirnéal", "Crnl"),
    ("Coisithe", "Cois"),
    ("Coláiste", "Col"),
    ("Comhairle", "Crl"),
    ("Contae", "Co"),
    ("Corrán", "Crrn"),
    ("Corr", "Crr"),
    ("Cosán", "Cos"),
    ("Crois", "X"),
    ("Crosaire", "Cro"),
    ("Cuan", "Cu"),
    ("Cuarbhóthar", "CB"),
    ("Cumann Lúthchleas Gael", "CLG"),
    ("Cumann Ríoga Bhaile Átha Cliath", "RDS"),
    ("Currach", "Crch"),
    ("Céide", "Cde"),
    ("Cé", "Cé"),
    ("Cúirt", "Crt"),
    ("Daingean", "Dngn"),
    ("Diméin", "Dim"),
    ("Doire", "Doi"),
    ("Domhnach", "Domh"),
    ("Droichead", "Dr"),
    ("Droim", "Drm"),
    ("Dugaí", "Dug"),
    ("Dumhcha", "Dumh"),
    ("Dún", "D"),
    ("Éadan", "Éad"),
    ("Eaglais", "Eag"),
    ("Eanach", "Ean"),
    ("Eastát", "Est"),
    ("Faiche", "Fai"),
    ("Fearann", "F"),
    ("Feirm", "Fei"),
    ("Foirgnimh", "Foi"),
    ("Gabhal", "Gabh"),
    ("Gairdíní", "Gdní"),
    ("Garraí", "Garr"),
    ("Garrán", "Grrn"),
    ("Geata", "Gea"),
    ("Glas", "Gls"),
    ("Glaise", "Glse"),
    ("Gleann", "Gl"),
    ("Gléib", "Gb"),
    ("Goirtín", "Gtn"),
    ("Gort", "G"),
    ("Gráig", "Gr"),
    ("Gráinseach", "Gch"),
    ("Halla", "H"),
    ("Iarnród", "Inrd"),
    ("Inis", "I"),
    ("Institiúid Teicneolaíochta", "IT"),
    ("Íochtar", "Íoch"),
    ("Ionad Baile", "IB"),
    ("Ionad Siopadóireachta", "IS"),
    ("Iostáin", "Ios"),
    ("Iothlainn", "Ioth"),
    ("Isteach", "Ist"),
    ("Ladhar", "Ldhr"),
    ("Leachta", "Leachta"),
    ("Leacht", "Leacht"),
    ("Leamhach", "Lmhch"),
    ("Leamhán", "Lmhán"),
    ("Leargain", "Leargn"),
    ("Learga", "Learga"),
    ("Leath", "Lth"),
    ("Leitir", "Ltr"),
    ("Lios", "Ls"),
    ("Lisín", "Lsín"),
    ("Loch", "L"),
    ("Lorgain", "Lrgn"),
    ("Lorga", "Lrga"),
    ("Lána", "Ln"),
    ("Lár", "Lr"),
    ("Léana", "Léa"),
    ("Léim", "Léi"),
    ("Lóiste", "Lói"),
    ("Machaire", "Mch"),
    ("Maigh", "Mgh"),
    ("Mainistir", "Mstr"),
    ("Mainéar", "Mai"),
    ("Malartán", "Mlrt"),
    ("Maol", "Ml"),
    ("Margadh", "Mrg"),
    ("Móin", "Mn"),
    ("Móinéar", "Mói"),
    ("Móinín", "Mói"),
    ("Muileann", "M"),
    ("Mullach", "Mull"),
    ("Mullaigh", "Mllgh"),
    ("Mulláin", "Mlln"),
    ("Mullán", "Mlln"),
    ("Na Bráithre Críostaí", "BC"),
    ("Naomh", "N"),
    ("Oifig Poist", "PO"),
    ("Oileán", "Oil"),
    ("Ollscoil Chathair Bhaile Átha Cliath", "OCBÁC"),
    ("Ollscoil Náisiúnta na hÉireann", "ONÉ"),
    ("Ollscoil Teicneolaíochta Bhaile Átha Cliath", "OTBÁC"),
    ("Ollscoil", "Olls"),
    ("Ospidéal Choláiste na hOllscoile", "OCO"),
    ("Ospidéal", "Osp"),
    ("Óstaí", "Óst"),
    ("Paráid", "Pd"),
    ("Pasáiste", "Pas"),
    ("Peile", "Peile"),
    ("Pictiúrlann", "Pclann"),
    ("Plásóg", "Plsg"),
    ("Plás", "Pl"),
    ("Pobail", "Pbl"),
    ("Pobal", "Pbl"),
    ("Poiblí ", "Pblí"),
    ("Pointe", "Pnt"),
    ("Poll", "P"),
    ("Port", "Prt"),
    ("Postoifig", "PO"),
    ("Páirc", "Prc"),
    ("Radharc", "Rrc"),
    ("Rae", "Rae"),
    ("Rinn", "Rnn"),
    ("Rochtain", "Rchtn"),
    ("Ros", "Ros"),
    ("Ráithín", "Rthín"),
    ("Ráth", "Rth"),
    ("San", "S"),
    ("Scabhat", "Sca"),
    ("Scairt", "Scrt"),
    ("Sceach", "Sc"),
    ("Scoil", "Scl"),
    ("Seachbhóthar", "Sbhr"),
    ("Seascann", "Scnn"),
    ("Seisceann", "Scnn"),
    ("Séipéal", "Séip"),
    ("Síneadh", "Sín"),
    ("Siúlán", "Sln"),
    ("Sliabh", "Sbh"),
    ("Srath", "Sth"),
    ("Sráidbhaile", "Srbh"),
    ("Sráid", "Sr"),
    ("Sruthán", "Srthn"),
    ("Staid", "Std"),
    ("Steach", "Stch"),
    ("Stigh", "Stgh"),
    ("Stáisiún", "Stn"),
    ("Stáisiún Dóiteáin", "Stn Dóit"),
    ("Stáisiún na nGardaí", "Stn Gardaí"),
    ("Talamh", "Tal"),
    ("Tamhnach", "Tamh"),
    ("Taobh", "Tbh"),
    ("Teach", "Tch"),
    ("Teampall", "Tmp"),
    ("Tigh", "Tgh"),
    ("Tionsclaíoch", "Tnsc"),
    ("Tobar", "Tob"),
    ("Trá", "Tr"),
    ("Tuaim", "Tm"),
    ("Tuar", "T"),
    ("Tulach", "Tul"),
    ("Tír", "Tír"),
    ("Tóchar", "Tchr"),
    ("Tóin", "Tn"),
    ("Uachtar", "Uach"),
    ("Uaimh", "Umh"),
    ("Úllord", "Úlld"),
];

/// Eclipsed lenited clusters, 4 characters.
const CLUSTERS_C4: &[&str] = &[
    "bhFl", "bhFr",
];

/// Consonant mutation clusters, 3 characters.
const CLUSTERS_C3: &[&str] = &[
    "Bhl", "Bhr", "mBl", "mBr", "Chl", "Chn", "Chr", "gCl",
    "gCn", "gCr", "Dhl", "Dhn", "Dhr", "nDl", "nDr", "bhF",
    "Fhl", "Fhr", "Ghl", "Ghn", "Ghr", "nGl", "nGn", "nGr",
    "Mhl", "Mhr", "Phl", "Phr", "bPl", "bPr", "tSl", "tSn",
    "tSr", "Shl", "Shn", "Shr", "Thl", "Thn", "Thr", "dTl",
    "dTn", "dTr",
];

/// Consonant mutation clusters, 2 characters.
const CLUSTERS_C2: &[&str] = &[
    "Bh", "mB", "Ch", "gC", "Dh", "nD", "Fh", "Gh",
    "nG", "Mh", "Ph", "bP", "tS", "Sh", "Th", "dT",
];

/// Vowel-initial mutation prefixes (h/n/t + vowel), 2 characters.
const VOWELS_V2: &[&str] = &[
    "hA", "hÁ", "nA", "nÁ", "tA", "tÁ", "hE", "hÉ",
    "nE", "nÉ", "tE", "tÉ", "hI", "hÍ", "nI", "nÍ",
    "tI", "tÍ", "hO", "hÓ", "nO", "nÓ", "tO", "tÓ",
    "hU", "hÚ", "nU", "nÚ", "tU", "tÚ",
];
