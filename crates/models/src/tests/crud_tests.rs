use anyhow::Result;
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::{company, contact, project, service, testimonial, status_check};

#[tokio::test]
async fn test_contact_insert_acknowledges_key_and_lists_newest_first() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let older = Uuid::new_v4();
    let newer = Uuid::new_v4();
    let now = Utc::now();
    for (id, at) in [(older, now - Duration::seconds(5)), (newer, now)] {
        let am = contact::ActiveModel {
            id: Set(id),
            name: Set("Juan Pérez".into()),
            company: Set("Empresa Test SA".into()),
            email: Set("juan.perez@empresatest.com".into()),
            phone: Set(None),
            industry: Set("Retail".into()),
            message: Set("Necesitamos exhibidores".into()),
            created_at: Set(at.into()),
            status: Set("new".into()),
        };
        let acked = contact::insert(&db, am).await?;
        assert_eq!(acked, id);
    }

    let rows = contact::list_recent(&db, 1000).await?;
    let pos_newer = rows.iter().position(|r| r.id == newer).expect("newer present");
    let pos_older = rows.iter().position(|r| r.id == older).expect("older present");
    assert!(pos_newer < pos_older);
    assert!(rows.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    contact::Entity::delete_by_id(older).exec(&db).await?;
    contact::Entity::delete_by_id(newer).exec(&db).await?;
    Ok(())
}

/// Replacement, filtering and ordering share the seeded tables, so they run in one test.
#[tokio::test]
async fn test_replace_all_then_query_shapes() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now();

    let projects = [("A", "Cosmética"), ("B", "Bebidas"), ("C", "Cosmética")]
        .into_iter()
        .enumerate()
        .map(|(i, (title, category))| project::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.into()),
            category: Set(category.into()),
            image: Set("https://images.example/p.jpg".into()),
            description: Set("desc".into()),
            created_at: Set((now + Duration::seconds(i as i64)).into()),
            featured: Set(false),
        })
        .collect::<Vec<_>>();
    assert_eq!(project::replace_all(&db, projects.clone()).await?, 3);
    assert_eq!(project::replace_all(&db, projects).await?, 3);

    let all = project::list(&db, None, 1000).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "C");
    let cosmetics = project::list(&db, Some("Cosmética"), 1000).await?;
    assert_eq!(cosmetics.len(), 2);
    assert!(cosmetics.iter().all(|p| p.category == "Cosmética"));
    assert!(project::list(&db, Some("cosmética"), 1000).await?.is_empty());

    let services = [3, 1, 2]
        .into_iter()
        .map(|order| service::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(format!("S{order}")),
            description: Set("desc".into()),
            icon: Set("Palette".into()),
            order: Set(order),
        })
        .collect::<Vec<_>>();
    service::replace_all(&db, services).await?;
    let listed = service::list_ordered(&db, 1000).await?;
    assert_eq!(listed.iter().map(|s| s.order).collect::<Vec<_>>(), vec![1, 2, 3]);

    let testimonials = [true, false, true]
        .into_iter()
        .map(|active| testimonial::ActiveModel {
            id: Set(Uuid::new_v4()),
            quote: Set("q".into()),
            author: Set("a".into()),
            position: Set("p".into()),
            company: Set("c".into()),
            created_at: Set(now.into()),
            active: Set(active),
        })
        .collect::<Vec<_>>();
    testimonial::replace_all(&db, testimonials).await?;
    let active = testimonial::list_active(&db, 1000).await?;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|t| t.active));
    Ok(())
}

#[tokio::test]
async fn test_company_and_status_check_reads() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    // Either state is valid; the query itself must succeed.
    let _ = company::find_first(&db).await?;

    let id = Uuid::new_v4();
    let am = status_check::ActiveModel {
        id: Set(id),
        client_name: Set("tester".into()),
        timestamp: Set(Utc::now().into()),
    };
    assert_eq!(status_check::insert(&db, am).await?, id);
    let rows = status_check::list(&db, 1000).await?;
    assert!(rows.iter().any(|r| r.id == id));
    status_check::Entity::delete_by_id(id).exec(&db).await?;
    Ok(())
}
