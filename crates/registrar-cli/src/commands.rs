//! Command handlers: run the seeder or one report and print the result.

use anyhow::Result;
use registrar_config::RegistrarConfig;
use registrar_db::RegistrarDb;
use registrar_db::seed::{SeedProfile, Seeder};

use crate::cli::Commands;

pub async fn dispatch(command: Commands, db: &RegistrarDb, config: &RegistrarConfig) -> Result<()> {
    match command {
        Commands::Seed { seed } => seed_store(db, config, seed).await,
        Commands::Top => {
            for (rank, row) in db.top_students().await?.iter().enumerate() {
                println!("{:>2}. {}  {:.2}", rank + 1, row.student, row.average);
            }
            Ok(())
        }
        Commands::Best { subject } => {
            match db.best_student_in_subject(&subject).await? {
                Some(row) => println!("{}  {:.2}", row.student, row.average),
                None => println!("no grades recorded in '{subject}'"),
            }
            Ok(())
        }
        Commands::GroupAverages { subject } => {
            for row in db.group_averages_in_subject(&subject).await? {
                println!("{}  {:.2}", row.group, row.average);
            }
            Ok(())
        }
        Commands::Overall => {
            match db.overall_average().await? {
                Some(average) => println!("{average:.2}"),
                None => println!("no grades recorded"),
            }
            Ok(())
        }
        Commands::TaughtBy { teacher_id } => print_names(db.subjects_taught_by(teacher_id).await?),
        Commands::Roster { group } => print_names(db.students_in_group(&group).await?),
        Commands::GroupGrades { group, subject } => {
            for row in db.group_grades_in_subject(&group, &subject).await? {
                println!(
                    "{}  {:.2}  {}",
                    row.student,
                    row.score,
                    row.received_at.format("%Y-%m-%d")
                );
            }
            Ok(())
        }
        Commands::TeacherAverage { teacher_id } => {
            match db.average_given_by_teacher(teacher_id).await? {
                Some(average) => println!("{average:.2}"),
                None => println!("no grades recorded for teacher {teacher_id}"),
            }
            Ok(())
        }
        Commands::Courses { student_id } => print_names(db.subjects_attended_by(student_id).await?),
        Commands::SharedCourses {
            teacher_id,
            student_id,
        } => print_names(db.subjects_taught_to(teacher_id, student_id).await?),
    }
}

fn print_names(names: Vec<String>) -> Result<()> {
    for name in names {
        println!("{name}");
    }
    Ok(())
}

async fn seed_store(db: &RegistrarDb, config: &RegistrarConfig, seed: Option<u64>) -> Result<()> {
    let profile = SeedProfile::from_config(&config.seed);
    let mut seeder = match seed.or(config.seed.rng_seed) {
        Some(seed) => Seeder::with_seed(profile, seed),
        None => Seeder::new(profile),
    };

    let summary = seeder.populate(db).await?;
    println!(
        "seeded {} groups, {} teachers, {} subjects, {} students, {} grades",
        summary.groups, summary.teachers, summary.subjects, summary.students, summary.grades
    );
    Ok(())
}
