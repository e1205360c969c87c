//! Built-in Spanish word lists for the rule model.

use super::Pos;

/// Function words and very common forms flagged as stop words.
pub const STOPWORDS: &[&str] = &[
    "a", "acá", "ahí", "al", "algo", "algunas", "alguno", "algunos", "allá", "allí", "además",
    "ante", "antes", "aquel", "aquella", "aquellas", "aquellos", "aquí", "así", "aún", "bajo",
    "bien", "cada", "casi", "como", "con", "contra", "cual", "cuales", "cuando", "cuanto",
    "de", "del", "desde", "donde", "dos", "durante", "e", "el", "él", "ella", "ellas", "ellos",
    "en", "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "está",
    "estaba", "estado", "están", "estas", "este", "esto", "estos", "estoy", "fue", "fueron",
    "fin", "ha", "había", "han", "hasta", "hay", "hace", "hacia", "hacer", "la", "las", "le",
    "les", "lo", "los", "más", "me", "mediante", "menos", "mi", "mis", "mismo", "muy", "mucho",
    "muchos", "nada", "ni", "no", "nos", "nosotros", "nuestra", "nuestras", "nuestro",
    "nuestros", "nunca", "o", "otra", "otras", "otro", "otros", "para", "pero", "poco", "por",
    "porque", "primero", "pues", "que", "qué", "quien", "quienes", "se", "sea", "según", "ser",
    "será", "si", "sí", "sido", "siempre", "sin", "sino", "sobre", "son", "su", "sus", "tal",
    "también", "tan", "tanto", "te", "tiene", "tienen", "todas", "todo", "todos", "tras", "tu",
    "tus", "u", "un", "una", "uno", "unos", "unas", "usted", "ustedes", "va", "vamos", "van",
    "y", "ya", "yo",
];

/// Closed-class words whose tag does not depend on context.
pub const CLOSED_CLASS: &[(&str, Pos)] = &[
    // determiners
    ("el", Pos::Det),
    ("la", Pos::Det),
    ("los", Pos::Det),
    ("las", Pos::Det),
    ("un", Pos::Det),
    ("una", Pos::Det),
    ("unos", Pos::Det),
    ("unas", Pos::Det),
    ("este", Pos::Det),
    ("esta", Pos::Det),
    ("estos", Pos::Det),
    ("estas", Pos::Det),
    ("ese", Pos::Det),
    ("esa", Pos::Det),
    ("esos", Pos::Det),
    ("esas", Pos::Det),
    ("aquel", Pos::Det),
    ("aquella", Pos::Det),
    ("su", Pos::Det),
    ("sus", Pos::Det),
    ("nuestro", Pos::Det),
    ("nuestra", Pos::Det),
    ("nuestros", Pos::Det),
    ("nuestras", Pos::Det),
    ("cada", Pos::Det),
    ("todo", Pos::Det),
    ("toda", Pos::Det),
    ("todos", Pos::Det),
    ("todas", Pos::Det),
    ("otro", Pos::Det),
    ("otra", Pos::Det),
    ("otros", Pos::Det),
    ("otras", Pos::Det),
    ("algunos", Pos::Det),
    ("algunas", Pos::Det),
    // prepositions and contractions
    ("a", Pos::Adp),
    ("al", Pos::Adp),
    ("ante", Pos::Adp),
    ("bajo", Pos::Adp),
    ("con", Pos::Adp),
    ("contra", Pos::Adp),
    ("de", Pos::Adp),
    ("del", Pos::Adp),
    ("desde", Pos::Adp),
    ("durante", Pos::Adp),
    ("en", Pos::Adp),
    ("entre", Pos::Adp),
    ("hacia", Pos::Adp),
    ("hasta", Pos::Adp),
    ("mediante", Pos::Adp),
    ("para", Pos::Adp),
    ("por", Pos::Adp),
    ("según", Pos::Adp),
    ("sin", Pos::Adp),
    ("sobre", Pos::Adp),
    ("tras", Pos::Adp),
    // pronouns
    ("yo", Pos::Pron),
    ("él", Pos::Pron),
    ("ella", Pos::Pron),
    ("ellos", Pos::Pron),
    ("ellas", Pos::Pron),
    ("nosotros", Pos::Pron),
    ("usted", Pos::Pron),
    ("ustedes", Pos::Pron),
    ("se", Pos::Pron),
    ("le", Pos::Pron),
    ("les", Pos::Pron),
    ("lo", Pos::Pron),
    ("me", Pos::Pron),
    ("nos", Pos::Pron),
    ("te", Pos::Pron),
    ("esto", Pos::Pron),
    ("eso", Pos::Pron),
    ("quien", Pos::Pron),
    ("quienes", Pos::Pron),
    ("cual", Pos::Pron),
    ("cuales", Pos::Pron),
    ("algo", Pos::Pron),
    ("nada", Pos::Pron),
    // conjunctions
    ("y", Pos::Cconj),
    ("e", Pos::Cconj),
    ("o", Pos::Cconj),
    ("u", Pos::Cconj),
    ("ni", Pos::Cconj),
    ("pero", Pos::Cconj),
    ("sino", Pos::Cconj),
    ("que", Pos::Sconj),
    ("porque", Pos::Sconj),
    ("si", Pos::Sconj),
    ("aunque", Pos::Sconj),
    ("como", Pos::Sconj),
    ("cuando", Pos::Sconj),
    ("donde", Pos::Sconj),
    // auxiliaries
    ("ser", Pos::Aux),
    ("es", Pos::Aux),
    ("son", Pos::Aux),
    ("era", Pos::Aux),
    ("eran", Pos::Aux),
    ("fue", Pos::Aux),
    ("fueron", Pos::Aux),
    ("será", Pos::Aux),
    ("serán", Pos::Aux),
    ("sea", Pos::Aux),
    ("sido", Pos::Aux),
    ("está", Pos::Aux),
    ("están", Pos::Aux),
    ("estaba", Pos::Aux),
    ("estar", Pos::Aux),
    ("ha", Pos::Aux),
    ("han", Pos::Aux),
    ("hemos", Pos::Aux),
    ("había", Pos::Aux),
    ("habían", Pos::Aux),
    // adverbs
    ("no", Pos::Adv),
    ("sí", Pos::Adv),
    ("muy", Pos::Adv),
    ("más", Pos::Adv),
    ("menos", Pos::Adv),
    ("también", Pos::Adv),
    ("ya", Pos::Adv),
    ("aún", Pos::Adv),
    ("así", Pos::Adv),
    ("hoy", Pos::Adv),
    ("ayer", Pos::Adv),
    ("siempre", Pos::Adv),
    ("nunca", Pos::Adv),
    ("además", Pos::Adv),
    ("casi", Pos::Adv),
    ("bien", Pos::Adv),
    ("aquí", Pos::Adv),
    ("allí", Pos::Adv),
    // number words
    ("dos", Pos::Num),
    ("tres", Pos::Num),
    ("cuatro", Pos::Num),
    ("cinco", Pos::Num),
    ("seis", Pos::Num),
    ("siete", Pos::Num),
    ("ocho", Pos::Num),
    ("nueve", Pos::Num),
    ("diez", Pos::Num),
    ("cien", Pos::Num),
    ("mil", Pos::Num),
    ("millones", Pos::Num),
];

/// Irregular forms the suffix rules would get wrong.
pub const LEMMAS: &[(&str, &str)] = &[
    ("el", "el"),
    ("la", "el"),
    ("los", "el"),
    ("las", "el"),
    ("una", "uno"),
    ("unos", "uno"),
    ("unas", "uno"),
    ("al", "al"),
    ("del", "del"),
    ("es", "ser"),
    ("son", "ser"),
    ("era", "ser"),
    ("eran", "ser"),
    ("fue", "ser"),
    ("fueron", "ser"),
    ("será", "ser"),
    ("serán", "ser"),
    ("sea", "ser"),
    ("sido", "ser"),
    ("está", "estar"),
    ("están", "estar"),
    ("estaba", "estar"),
    ("ha", "haber"),
    ("han", "haber"),
    ("hemos", "haber"),
    ("había", "haber"),
    ("habían", "haber"),
    ("hay", "haber"),
    ("tiene", "tener"),
    ("tienen", "tener"),
    ("tenemos", "tener"),
    ("hace", "hacer"),
    ("hizo", "hacer"),
    ("va", "ir"),
    ("van", "ir"),
    ("vamos", "ir"),
    ("puede", "poder"),
    ("pueden", "poder"),
    ("podemos", "poder"),
    ("estas", "este"),
    ("esta", "este"),
    ("estos", "este"),
    ("esas", "ese"),
    ("esa", "ese"),
    ("esos", "ese"),
    ("sus", "su"),
    ("nuestra", "nuestro"),
    ("nuestros", "nuestro"),
    ("nuestras", "nuestro"),
    ("toda", "todo"),
    ("todos", "todo"),
    ("todas", "todo"),
    ("otra", "otro"),
    ("otros", "otro"),
    ("otras", "otro"),
    ("millones", "millón"),
    ("jóvenes", "joven"),
    ("países", "país"),
    ("mujeres", "mujer"),
    ("meses", "mes"),
    ("intereses", "interés"),
];

/// Abbreviations that keep their period as part of the token.
pub const ABBREVIATIONS: &[&str] = &[
    "sr.", "sra.", "srta.", "dr.", "dra.", "lic.", "ing.", "mtro.", "mtra.", "gral.", "núm.",
    "art.", "arts.", "etc.", "pág.", "págs.", "aprox.", "av.", "col.", "dpto.", "ee.",
    "uu.", "fracc.", "cap.", "vol.",
];

/// Words ending like infinitives that are not verbs.
pub const NOT_INFINITIVES: &[&str] = &[
    "lugar", "hogar", "mar", "par", "bienestar", "militar", "popular", "familiar",
    "particular", "nuclear", "solar", "escolar", "regular", "titular", "similar", "mujer",
    "ayer", "placer", "poder", "deber", "taller", "carácter", "alfiler",
];

/// Countries and places the report names often.
pub const GAZETTEER: &[(&str, &str)] = &[
    ("méxico", "LOC"),
    ("república mexicana", "LOC"),
    ("estados unidos", "LOC"),
    ("américa latina", "LOC"),
    ("centroamérica", "LOC"),
    ("canadá", "LOC"),
    ("guatemala", "LOC"),
    ("aguascalientes", "LOC"),
    ("baja california", "LOC"),
    ("baja california sur", "LOC"),
    ("campeche", "LOC"),
    ("chiapas", "LOC"),
    ("chihuahua", "LOC"),
    ("ciudad de méxico", "LOC"),
    ("coahuila", "LOC"),
    ("colima", "LOC"),
    ("durango", "LOC"),
    ("estado de méxico", "LOC"),
    ("guanajuato", "LOC"),
    ("guerrero", "LOC"),
    ("hidalgo", "LOC"),
    ("jalisco", "LOC"),
    ("michoacán", "LOC"),
    ("morelos", "LOC"),
    ("nayarit", "LOC"),
    ("nuevo león", "LOC"),
    ("oaxaca", "LOC"),
    ("puebla", "LOC"),
    ("querétaro", "LOC"),
    ("quintana roo", "LOC"),
    ("san luis potosí", "LOC"),
    ("sinaloa", "LOC"),
    ("sonora", "LOC"),
    ("tabasco", "LOC"),
    ("tamaulipas", "LOC"),
    ("tlaxcala", "LOC"),
    ("veracruz", "LOC"),
    ("yucatán", "LOC"),
    ("zacatecas", "LOC"),
    ("pemex", "ORG"),
    ("cfe", "ORG"),
    ("imss", "ORG"),
    ("issste", "ORG"),
    ("conacyt", "ORG"),
];

/// First words that mark an organization name.
pub const ORG_KEYWORDS: &[&str] = &[
    "secretaría", "instituto", "banco", "comisión", "consejo", "gobierno", "universidad",
    "sistema", "fondo", "congreso", "senado", "cámara", "partido", "ejército", "guardia",
    "fiscalía", "suprema", "tribunal", "procuraduría", "petróleos", "coordinación",
    "dirección", "agencia", "centro", "servicio", "organización", "fuerza", "marina",
];

/// First words that mark a place name.
pub const LOC_KEYWORDS: &[&str] = &[
    "estado", "ciudad", "municipio", "golfo", "río", "sierra", "península", "istmo", "valle",
    "puerto", "región", "zona", "isla", "lago", "bahía",
];

/// Given names that open a person's name.
pub const GIVEN_NAMES: &[&str] = &[
    "andrés", "manuel", "josé", "juan", "luis", "carlos", "jorge", "miguel", "francisco",
    "antonio", "alejandro", "ricardo", "marcelo", "alfonso", "benito", "lázaro", "emiliano",
    "pancho", "porfirio", "maría", "guadalupe", "rosa", "ana", "olga", "claudia", "irma",
    "luisa", "graciela", "rocío", "leticia", "beatriz", "javier", "rafael", "hugo",
];
