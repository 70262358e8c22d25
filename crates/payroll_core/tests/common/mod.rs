#![allow(dead_code)]

use chrono::NaiveDate;
use payroll_core::db::open_db_in_memory;
use payroll_core::EntityId;
use rusqlite::{params, Connection};

pub struct Seeded {
    pub conn: Connection,
    pub acme: EntityId,
    pub globex: EntityId,
    pub initech: EntityId,
    pub ivan_petrov: EntityId,
    pub anna_sidorova: EntityId,
    pub ivan_smirnov: EntityId,
    pub maria_ivanova: EntityId,
    pub oleg_kuznetsov: EntityId,
    pub pavel_orlov: EntityId,
    pub nina_volkova: EntityId,
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn insert_organization(conn: &Connection, name: &str) -> EntityId {
    conn.execute("INSERT INTO organizations (name) VALUES (?1);", [name])
        .unwrap();
    conn.last_insert_rowid()
}

pub fn insert_employee(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    birthday: NaiveDate,
    organization_id: Option<EntityId>,
) -> EntityId {
    conn.execute(
        "INSERT INTO employees (first_name, last_name, birthday, organization_id)
         VALUES (?1, ?2, ?3, ?4);",
        params![first_name, last_name, birthday, organization_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn insert_payment(conn: &Connection, receiver_id: EntityId, amount: i64) -> EntityId {
    conn.execute(
        "INSERT INTO payments (amount, receiver_id) VALUES (?1, ?2);",
        params![amount, receiver_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

/// Three organizations, seven employees (one without employer, one never
/// paid) and nine payments totalling 14500.
///
/// | employee       | organization | payments     | average |
/// |----------------|--------------|--------------|---------|
/// | Ivan Petrov    | Acme         | 1000, 3000   | 2000    |
/// | Anna Sidorova  | Acme         | 500          | 500     |
/// | Ivan Smirnov   | Acme         | 800, 200     | 500     |
/// | Maria Ivanova  | Globex       | 4000         | 4000    |
/// | Oleg Kuznetsov | Globex       | 1500, 2500   | 2000    |
/// | Pavel Orlov    | Initech      | -            | -       |
/// | Nina Volkova   | -            | 1000         | 1000    |
pub fn seed() -> Seeded {
    let conn = open_db_in_memory().unwrap();

    let acme = insert_organization(&conn, "Acme");
    let globex = insert_organization(&conn, "Globex");
    let initech = insert_organization(&conn, "Initech");

    let ivan_petrov = insert_employee(&conn, "Ivan", "Petrov", date(1985, 3, 10), Some(acme));
    let anna_sidorova =
        insert_employee(&conn, "Anna", "Sidorova", date(1990, 7, 22), Some(acme));
    let ivan_smirnov = insert_employee(&conn, "Ivan", "Smirnov", date(1979, 11, 5), Some(acme));
    let maria_ivanova =
        insert_employee(&conn, "Maria", "Ivanova", date(1995, 1, 30), Some(globex));
    let oleg_kuznetsov =
        insert_employee(&conn, "Oleg", "Kuznetsov", date(1988, 6, 15), Some(globex));
    let pavel_orlov = insert_employee(&conn, "Pavel", "Orlov", date(2000, 2, 2), Some(initech));
    let nina_volkova = insert_employee(&conn, "Nina", "Volkova", date(1992, 9, 9), None);

    insert_payment(&conn, ivan_petrov, 1000);
    insert_payment(&conn, ivan_petrov, 3000);
    insert_payment(&conn, anna_sidorova, 500);
    insert_payment(&conn, ivan_smirnov, 800);
    insert_payment(&conn, ivan_smirnov, 200);
    insert_payment(&conn, maria_ivanova, 4000);
    insert_payment(&conn, oleg_kuznetsov, 1500);
    insert_payment(&conn, oleg_kuznetsov, 2500);
    insert_payment(&conn, nina_volkova, 1000);

    Seeded {
        conn,
        acme,
        globex,
        initech,
        ivan_petrov,
        anna_sidorova,
        ivan_smirnov,
        maria_ivanova,
        oleg_kuznetsov,
        pavel_orlov,
        nina_volkova,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
