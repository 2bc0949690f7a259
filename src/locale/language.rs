//! Language-level word lists shared by every locale that speaks the language.

pub struct LanguageData {
    pub first_names_male: &'static [&'static str],
    pub first_names_female: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub prefixes_male: &'static [&'static str],
    pub prefixes_female: &'static [&'static str],
    /// Street name patterns; `{}` is replaced with a street root.
    pub street_patterns: &'static [&'static str],
    pub street_roots: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
}

pub static ENGLISH: LanguageData = LanguageData {
    first_names_male: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
        "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul",
    ],
    first_names_female: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
        "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Sandra", "Ashley", "Emily",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson",
        "Anderson", "Taylor", "Thomas", "Moore", "Martin", "Jackson", "Thompson", "White",
        "Harris", "Clark", "Lewis", "Walker",
    ],
    prefixes_male: &["Mr.", "Dr."],
    prefixes_female: &["Mrs.", "Ms.", "Miss", "Dr."],
    street_patterns: &["{} Street", "{} Avenue", "{} Road", "{} Lane", "{} Drive", "{} Court"],
    street_roots: &[
        "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Sunset",
        "Church", "Mill", "River", "Highland",
    ],
    company_suffixes: &["Inc", "LLC", "Ltd", "Group", "PLC"],
};

pub static PORTUGUESE: LanguageData = LanguageData {
    first_names_male: &[
        "João", "Pedro", "Lucas", "Gabriel", "Rafael", "Mateus", "Gustavo", "Felipe",
        "Bruno", "Thiago", "Rodrigo", "Diego", "Vinícius", "André",
    ],
    first_names_female: &[
        "Maria", "Ana", "Juliana", "Fernanda", "Camila", "Beatriz", "Larissa", "Mariana",
        "Letícia", "Gabriela", "Amanda", "Bruna", "Luana", "Sofia",
    ],
    last_names: &[
        "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
        "Lima", "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes",
    ],
    prefixes_male: &["Sr.", "Dr."],
    prefixes_female: &["Sra.", "Srta.", "Dra."],
    street_patterns: &["Rua {}", "Avenida {}", "Travessa {}", "Alameda {}", "Praça {}"],
    street_roots: &[
        "das Flores", "São João", "Sete de Setembro", "Tiradentes", "Dom Pedro II",
        "da Liberdade", "Santos Dumont", "Getúlio Vargas", "das Palmeiras", "XV de Novembro",
    ],
    company_suffixes: &["Ltda.", "S.A.", "S/A", "e Filhos", "ME"],
};

pub static FRENCH: LanguageData = LanguageData {
    first_names_male: &[
        "Jean", "Pierre", "Michel", "Louis", "Nicolas", "Julien", "Thomas", "Antoine",
        "François", "Hugo", "Mathieu", "Étienne", "Olivier", "Rémi",
    ],
    first_names_female: &[
        "Marie", "Camille", "Julie", "Sophie", "Léa", "Manon", "Chloé", "Émilie", "Claire",
        "Céline", "Anaïs", "Margaux", "Inès", "Zoé",
    ],
    last_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "Fournier",
    ],
    prefixes_male: &["M.", "Dr"],
    prefixes_female: &["Mme", "Mlle", "Dr"],
    street_patterns: &["rue {}", "avenue {}", "boulevard {}", "place {}", "chemin {}"],
    street_roots: &[
        "de la République", "Victor Hugo", "Jean Jaurès", "de la Paix", "du Moulin",
        "des Lilas", "Pasteur", "de l'Église", "Gambetta", "du Général de Gaulle",
    ],
    company_suffixes: &["SARL", "SA", "SAS", "et Fils", "EURL"],
};

pub static GERMAN: LanguageData = LanguageData {
    first_names_male: &[
        "Lukas", "Leon", "Felix", "Jonas", "Maximilian", "Paul", "Jan", "Tobias", "Stefan",
        "Jürgen", "Matthias", "Sebastian", "Florian", "Andreas",
    ],
    first_names_female: &[
        "Anna", "Lena", "Laura", "Julia", "Sarah", "Lea", "Hannah", "Katharina", "Sabine",
        "Jana", "Sophie", "Ursula", "Petra", "Monika",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
    ],
    prefixes_male: &["Herr", "Dr."],
    prefixes_female: &["Frau", "Dr."],
    street_patterns: &["{}straße", "{}weg", "{}gasse", "{}platz", "{}allee"],
    street_roots: &[
        "Haupt", "Bahnhof", "Schul", "Garten", "Berg", "Kirch", "Linden", "Wald", "Dorf",
        "Mühlen", "Goethe", "Schiller",
    ],
    company_suffixes: &["GmbH", "AG", "KG", "GmbH & Co. KG", "OHG"],
};

pub static SPANISH: LanguageData = LanguageData {
    first_names_male: &[
        "José", "Antonio", "Manuel", "Francisco", "Juan", "David", "Javier", "Carlos",
        "Miguel", "Alejandro", "Pablo", "Sergio", "Raúl", "Andrés",
    ],
    first_names_female: &[
        "María", "Carmen", "Josefa", "Isabel", "Laura", "Lucía", "Ana", "Marta", "Elena",
        "Sofía", "Paula", "Cristina", "Valentina", "Rocío",
    ],
    last_names: &[
        "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez",
        "Pérez", "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández", "Díaz", "Moreno",
        "Álvarez",
    ],
    prefixes_male: &["Sr.", "Dr."],
    prefixes_female: &["Sra.", "Srta.", "Dra."],
    street_patterns: &["Calle {}", "Avenida {}", "Paseo {}", "Plaza {}", "Camino {}"],
    street_roots: &[
        "Mayor", "del Sol", "de la Constitución", "Real", "de Alcalá", "Nueva",
        "de la Paz", "San Francisco", "del Carmen", "de Cervantes",
    ],
    company_suffixes: &["S.L.", "S.A.", "y Asociados", "S.L.U.", "Hermanos"],
};

pub static ITALIAN: LanguageData = LanguageData {
    first_names_male: &[
        "Giuseppe", "Giovanni", "Antonio", "Mario", "Luigi", "Francesco", "Marco",
        "Alessandro", "Lorenzo", "Matteo", "Andrea", "Stefano", "Davide", "Paolo",
    ],
    first_names_female: &[
        "Maria", "Anna", "Giuseppina", "Rosa", "Giulia", "Francesca", "Chiara", "Sara",
        "Alessia", "Martina", "Elena", "Valentina", "Federica", "Silvia",
    ],
    last_names: &[
        "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
        "Marino", "Greco", "Bruno", "Gallo", "Conti", "De Luca", "Costa", "Giordano",
    ],
    prefixes_male: &["Sig.", "Dott."],
    prefixes_female: &["Sig.ra", "Dott.ssa"],
    street_patterns: &["Via {}", "Piazza {}", "Corso {}", "Viale {}", "Vicolo {}"],
    street_roots: &[
        "Roma", "Garibaldi", "Giuseppe Verdi", "Dante", "Mazzini", "Cavour", "Vittorio Emanuele",
        "della Repubblica", "San Marco", "dei Mille",
    ],
    company_suffixes: &["S.p.A.", "s.r.l.", "e figli", "S.n.c.", "Group"],
};

/// Latin filler used by the lorem provider regardless of locale.
pub static LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum",
];
