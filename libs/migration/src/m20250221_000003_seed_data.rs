use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES
                ('01951f2a-0000-7000-8000-000000000001', 'Study', NOW(), NOW()),
                ('01951f2a-0000-7000-8000-000000000002', 'Personal', NOW(), NOW()),
                ('01951f2a-0000-7000-8000-000000000003', 'Shopping', NOW(), NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO tasks (id, title, description, status, category_id, created_at, updated_at)
            VALUES
                (
                    '01951f2a-0000-7000-8000-000000000011',
                    'Review Sorting Algorithm',
                    'Understand mergeSort',
                    'pending',
                    '01951f2a-0000-7000-8000-000000000001',
                    NOW(),
                    NOW()
                ),
                (
                    '01951f2a-0000-7000-8000-000000000012',
                    'Explain the problem out loud',
                    'Improve problem-solving and communication skills',
                    'pending',
                    '01951f2a-0000-7000-8000-000000000001',
                    NOW(),
                    NOW()
                ),
                (
                    '01951f2a-0000-7000-8000-000000000013',
                    'Time Drills',
                    'Stick to 5 mins/easy, 10 mins/medium, and 15 mins/hard problems',
                    'pending',
                    '01951f2a-0000-7000-8000-000000000001',
                    NOW(),
                    NOW()
                )
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            DELETE FROM tasks WHERE id IN (
                '01951f2a-0000-7000-8000-000000000011',
                '01951f2a-0000-7000-8000-000000000012',
                '01951f2a-0000-7000-8000-000000000013'
            )
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            DELETE FROM categories WHERE id IN (
                '01951f2a-0000-7000-8000-000000000001',
                '01951f2a-0000-7000-8000-000000000002',
                '01951f2a-0000-7000-8000-000000000003'
            )
            "#,
        )
        .await?;

        Ok(())
    }
}
