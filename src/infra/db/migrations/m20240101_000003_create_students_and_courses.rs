//! Migration: Create students, courses and the student_course join table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // Composite primary key: a pair is stored at most once
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StudentCourse::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentCourse::CourseId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(StudentCourse::StudentId)
                            .col(StudentCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_student_id")
                            .from(StudentCourse::Table, StudentCourse::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_course_id")
                            .from(StudentCourse::Table, StudentCourse::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourse::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
}

#[derive(DeriveIden)]
enum StudentCourse {
    Table,
    StudentId,
    CourseId,
}
