//! Bundled Khmer practice sentences
//!
//! Words are separated by zero-width spaces, the way Khmer text is usually
//! prepared for line breaking. They are stripped before display.

use super::models::Corpus;

pub const KHMER_SENTENCES: &[&str] = &[
    "សួស្តី\u{200B}អ្នក\u{200B}សុខ\u{200B}សប្បាយ\u{200B}ជា\u{200B}ទេ?",
    "ខ្ញុំ\u{200B}សុខ\u{200B}សប្បាយ\u{200B}ជា\u{200B}ទេ\u{200B}អរគុណ។",
    "ខ្ញុំ\u{200B}ឈ្មោះ\u{200B}សុខា។",
    "តើ\u{200B}អ្នក\u{200B}ឈ្មោះ\u{200B}អ្វី?",
    "ខ្ញុំ\u{200B}រៀន\u{200B}ភាសា\u{200B}ខ្មែរ។",
    "ខ្ញុំ\u{200B}ស្រឡាញ់\u{200B}ប្រទេស\u{200B}កម្ពុជា។",
    "អរគុណ\u{200B}ច្រើន។",
    "ថ្ងៃនេះ\u{200B}អាកាសធាតុ\u{200B}ល្អ\u{200B}ណាស់។",
    "ខ្ញុំ\u{200B}ចង់\u{200B}ញ៉ាំ\u{200B}បាយ។",
    "តើ\u{200B}ផ្សារ\u{200B}នៅ\u{200B}ឯណា?",
    "ខ្ញុំ\u{200B}មិន\u{200B}យល់\u{200B}ទេ។",
    "សូម\u{200B}និយាយ\u{200B}យឺតៗ។",
    "តើ\u{200B}នេះ\u{200B}ថ្លៃ\u{200B}ប៉ុន្មាន?",
    "ខ្ញុំ\u{200B}ផឹក\u{200B}តែ\u{200B}រៀងរាល់\u{200B}ព្រឹក។",
    "ម្តាយ\u{200B}ខ្ញុំ\u{200B}ធ្វើ\u{200B}ម្ហូប\u{200B}ឆ្ងាញ់។",
    "យើង\u{200B}ទៅ\u{200B}សាលារៀន\u{200B}ជាមួយគ្នា។",
    "ជួប\u{200B}គ្នា\u{200B}ថ្ងៃ\u{200B}ស្អែក។",
    "ខ្ញុំ\u{200B}រស់នៅ\u{200B}ក្នុង\u{200B}ទីក្រុង\u{200B}ភ្នំពេញ។",
];

/// The bundled corpus
pub fn khmer_corpus() -> Corpus {
    Corpus {
        sentences: KHMER_SENTENCES.iter().map(|s| s.to_string()).collect(),
    }
}
