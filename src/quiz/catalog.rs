use std::fmt;

/// Career categories in catalog order. Ties are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Programmer,
    Designer,
    DataScientist,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Programmer,
        Category::Designer,
        Category::DataScientist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Programmer => "Programmer",
            Category::Designer => "Designer",
            Category::DataScientist => "Data Scientist",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Programmer => 0,
            Category::Designer => 1,
            Category::DataScientist => 2,
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            Category::Programmer => "💡 Coba belajar Git, Python, atau ikutan competitive programming.",
            Category::Designer => "💡 Explore Figma, dan baca buku 'Don't Make Me Think'.",
            Category::DataScientist => {
                "💡 Mulai dari Pandas, Kaggle dataset, dan dasar Machine Learning."
            }
        }
    }

    pub fn quotes(&self) -> &'static [&'static str] {
        match self {
            Category::Programmer => &[
                "“Talk is cheap. Show me the code.” 💻",
                "“Programmer: a machine that turns coffee into code.” ☕💻",
                "“Code never lies, comments sometimes do.” 🔍",
            ],
            Category::Designer => &[
                "“Design is intelligence made visible.” 🎨",
                "“Good design is obvious. Great design is transparent.” ✨",
                "“People ignore design that ignores people.” 👥",
            ],
            Category::DataScientist => &[
                "“Without data, you’re just another person with an opinion.” 📊",
                "“Data is the new oil.” ⛽📊",
                "“The goal is to turn data into information, and information into insight.” 🔎",
            ],
        }
    }

    /// Badge shown when this category wins alone.
    pub fn solo_badge(&self) -> &'static str {
        match self {
            Category::Programmer => "Siap siap ngopi jam 2 pagi sambil debug bug misterius 😆",
            Category::Designer => "Debat warna #FFFFFF vs #FAFAFA itu serius banget loh 🤯",
            Category::DataScientist => "Anggap dataset sebagai sahabat sejati 🤭",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One answer option and the points it awards per category.
#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub text: &'static str,
    pub weights: &'static [(Category, u32)],
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

use Category::{DataScientist as D, Designer as G, Programmer as P};

const fn opt(text: &'static str, weights: &'static [(Category, u32)]) -> QuizOption {
    QuizOption { text, weights }
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "Aktivitas yang paling bikin kamu puas:",
        options: &[
            opt("Menyelesaikan masalah logika/algoritma", &[(P, 5), (D, 4), (G, 2)]),
            opt("Membuat desain visual", &[(G, 5), (P, 2), (D, 2)]),
            opt("Menginterpretasi data/statistik", &[(D, 5), (P, 4), (G, 2)]),
            opt("Berkoordinasi & memimpin tim", &[(P, 3), (G, 3), (D, 3)]),
        ],
    },
    Question {
        prompt: "Tools yang paling ingin kamu kuasai:",
        options: &[
            opt("VS Code, GitHub", &[(P, 5), (D, 3), (G, 1)]),
            opt("Figma, Adobe, Canva", &[(G, 5), (P, 2), (D, 1)]),
            opt("Python, R, Pandas", &[(D, 5), (P, 4), (G, 1)]),
            opt("Trello, Miro, Notion", &[(P, 3), (G, 3), (D, 3)]),
        ],
    },
    Question {
        prompt: "Cara menghadapi masalah kompleks:",
        options: &[
            opt("Debugging step-by-step", &[(P, 5), (D, 3), (G, 1)]),
            opt("Riset data & uji hipotesis", &[(D, 5), (P, 3), (G, 1)]),
            opt("User testing & iterasi desain", &[(G, 5), (P, 2), (D, 1)]),
            opt("Brainstorm bareng tim", &[(P, 3), (G, 3), (D, 3)]),
        ],
    },
    Question {
        prompt: "Hasil kerja yang bikin kamu bangga:",
        options: &[
            opt("Aplikasi berjalan stabil", &[(P, 5), (G, 2), (D, 2)]),
            opt("UI/UX cantik & ramah pengguna", &[(G, 5), (P, 2), (D, 2)]),
            opt("Model statistik akurat", &[(D, 5), (P, 3), (G, 2)]),
            opt("Dokumentasi jelas & bisa dipahami", &[(P, 3), (G, 3), (D, 3)]),
        ],
    },
    Question {
        prompt: "Jika diberi 1 minggu belajar sesuatu:",
        options: &[
            opt("Algoritma & struktur data", &[(P, 5), (D, 3), (G, 1)]),
            opt("Prinsip warna & tipografi", &[(G, 5), (P, 2), (D, 1)]),
            opt("Machine learning dasar", &[(D, 5), (P, 3), (G, 1)]),
            opt("Manajemen proyek & komunikasi", &[(P, 3), (G, 3), (D, 3)]),
        ],
    },
];
