use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Utc;

use confab::quiz::{score, Question, QuizHistory, QuizRecord, Recommendation, QUESTIONS};

use super::utils::LineReader;

pub async fn run_quiz(export: Option<&Path>) -> anyhow::Result<()> {
    let mut input = LineReader::new();
    let mut history = QuizHistory::default();
    println!("🎉 Quiz ala horoscope tapi versi karier 🚀");
    println!("Cari tahu apakah kamu lebih cocok jadi Programmer, Designer, atau Data Scientist!\n");

    loop {
        let Some(answers) = ask_all(&mut input, QUESTIONS).await? else {
            break;
        };
        let tally = score(QUESTIONS, &answers)?;
        let recommendation = Recommendation::from_tally(&tally, &mut rand::thread_rng());
        print_result(&recommendation);
        history.push(QuizRecord::new(tally, recommendation.summary.clone(), Utc::now()));
        log::info!("quiz finished: {}", recommendation.summary);

        match input.prompt("\nUlangi kuis? (y/N) ").await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    print_history(&history);
    if let Some(path) = export {
        if history.is_empty() {
            println!("Belum ada riwayat kuis, {} tidak ditulis.", path.display());
        } else {
            history.write_csv(BufWriter::new(File::create(path)?))?;
            println!("💾 Riwayat disimpan ke {}", path.display());
        }
    }
    Ok(())
}

/// Asks every question in order. `None` when input ends early.
async fn ask_all(input: &mut LineReader, questions: &[Question]) -> anyhow::Result<Option<Vec<Option<usize>>>> {
    let mut answers = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.prompt);
        for (n, option) in question.options.iter().enumerate() {
            println!("   {}) {}", n + 1, option.text);
        }
        let choice = loop {
            let Some(line) = input.prompt("Pilih jawaban: ").await? else {
                return Ok(None);
            };
            match parse_choice(&line, question.options.len()) {
                Some(choice) => break choice,
                None => println!("Masukkan angka 1-{}.", question.options.len()),
            }
        };
        answers.push(Some(choice));
        println!("[{}/{}]\n", index + 1, questions.len());
    }
    Ok(Some(answers))
}

/// 1-based menu input to a 0-based option index.
fn parse_choice(line: &str, options: usize) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=options).contains(&n).then(|| n - 1)
}

fn print_result(rec: &Recommendation) {
    println!("✅ Rekomendasi Karier Kamu");
    println!("{}", rec.headline);
    println!("[{}]", rec.badge);
    for note in &rec.notes {
        println!("{note}");
    }
    if let Some(quote) = rec.quote {
        println!("{quote}");
    }
}

fn print_history(history: &QuizHistory) {
    if history.is_empty() {
        println!("Belum ada riwayat kuis.");
        return;
    }
    println!("\n📒 Riwayat Kuis");
    for record in history.records() {
        let scores = record
            .scores
            .iter()
            .map(|(category, points)| format!("{category} {points}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}  {}  → {}", record.date, record.time, scores, record.result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_one_based_and_bounded() {
        assert_eq!(parse_choice("1", 4), Some(0));
        assert_eq!(parse_choice(" 4 ", 4), Some(3));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("dua", 4), None);
    }
}
