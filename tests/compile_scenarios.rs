use petty_cash_ledger::{
    entities::{Column, LedgerRow, LedgerSheet},
    ext::{
        standard_accounts::{DOMESTIC_MARKER, TAX_STATUS_EXEMPT, TAX_STATUS_SUBJECT},
        standard_payers::settlement_level4,
    },
    util::PettyCashLedgerUtil,
};

fn config(payer: &str, project: &str) -> String {
    format!(
        r#"RunConfig(
            petty_cash_number: "7",
            payer_name: "{payer}",
            entry_date: "1403/03/12",
            project_name: "{project}",
            default_level4: "21",
            default_level5: "4001",
        )"#
    )
}

async fn compile(payer: &str, csv: &str) -> LedgerSheet {
    PettyCashLedgerUtil::new()
        .from_string(&config(payer, "مهر"), csv)
        .await
        .expect("compile")
}

fn text(row: &LedgerRow, column: Column) -> Option<&str> {
    row.get(column).and_then(|v| v.as_text())
}

fn settlements(sheet: &LedgerSheet) -> Vec<f64> {
    sheet
        .rows_with_account(1131)
        .filter_map(LedgerRow::credit)
        .collect()
}

#[tokio::test]
async fn single_record_yields_expense_and_settlement() {
    let csv = "شرح سند,مبلغ,ارزش افزوده,کارمزد\nخرید خودکار,100,0,0\n";
    let sheet = compile("اقای حقی", csv).await;

    let rows = sheet.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row, 2);
    assert_eq!(rows[0].account(), Some(7203));
    assert_eq!(rows[0].debit(), Some(100.0));
    assert_eq!(rows[1].row, 3);
    assert_eq!(rows[1].account(), Some(1131));
    assert_eq!(rows[1].credit(), Some(100.0));
    assert_eq!(text(&rows[1], Column::X), settlement_level4("اقای حقی"));
}

#[tokio::test]
async fn each_ungrouped_record_settles_its_full_amount() {
    let csv = "\
شرح سند,مبلغ,ارزش افزوده,کارمزد
خرید خودکار,1000,90,10
اجرت نظافت,500,,
";
    let sheet = compile("اقای حقی", csv).await;

    let accounts: Vec<_> = sheet.rows().iter().filter_map(LedgerRow::account).collect();
    assert_eq!(accounts, vec![7203, 3221, 7512, 1131, 7350, 1131]);
    assert_eq!(settlements(&sheet), vec![1100.0, 500.0]);
}

#[tokio::test]
async fn grouped_run_settles_once_and_zero_closer_is_skipped() {
    let csv = "\
شرح سند,مبلغ,پرداخت جمعی
خرید خودکار,50,1
خرید مداد,70,1
,0,
";
    let sheet = compile("اقای حقی", csv).await;

    let rows = sheet.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].debit(), Some(50.0));
    assert_eq!(rows[1].debit(), Some(70.0));
    assert_eq!(rows[2].account(), Some(1131));
    assert_eq!(rows[2].credit(), Some(120.0));
    assert_eq!(
        rows[2].description(),
        Some("پرداخت جمعی 2 فقره فاکتور طی تنخواه شماره 7 اقای حقی پروژه مهر")
    );
}

#[tokio::test]
async fn grouped_run_open_at_end_of_input_is_flushed() {
    let csv = "\
شرح سند,مبلغ,پرداخت گروهی
خرید خودکار,50,
خرید مداد,70,1
لوازم التحریر,30,1
";
    let sheet = compile("اقای حقی", csv).await;

    assert_eq!(settlements(&sheet), vec![50.0, 100.0]);
    let last = sheet.rows().last().expect("settlement row");
    assert_eq!(last.description(), Some("لوازم التحریر پروژه مهر"));
}

#[tokio::test]
async fn stray_text_in_group_column_opens_a_group() {
    // Suspicious but long-standing: any non-numeric text counts as grouped.
    let csv = "شرح سند,مبلغ,پرداخت جمعی\nخرید خودکار,50,ندارد\n";
    let sheet = compile("اقای حقی", csv).await;

    assert_eq!(sheet.len(), 2);
    assert_eq!(settlements(&sheet), vec![50.0]);
    assert!(sheet.rows()[1]
        .description()
        .is_some_and(|d| d.starts_with("خرید خودکار")));
}

#[tokio::test]
async fn area_payer_settles_per_contiguous_area() {
    let csv = "\
ناحیه,شرح سند,مبلغ
شمال,خرید خودکار,100
شمال,خرید مداد,50
جنوب,خرید خودکار,30
,خرید مداد,20
جنوب,خرید خودکار,5
";
    let payer = "اقای الماسی";
    let sheet = compile(payer, csv).await;

    assert_eq!(settlements(&sheet), vec![150.0, 30.0, 5.0]);
    let accounts: Vec<_> = sheet.rows().iter().filter_map(LedgerRow::account).collect();
    assert_eq!(accounts, vec![7203, 7203, 1131, 7203, 1131, 7203, 7203, 1131]);

    let closings: Vec<&LedgerRow> = sheet.rows_with_account(1131).collect();
    assert_eq!(closings[0].description(), Some("پرداخت ناحیه شمال"));
    assert_eq!(
        text(closings[0], Column::D),
        Some("پرداخت ناحیه شمال طی تنخواه 7 اقای الماسی پروژه مهر")
    );
    assert_eq!(
        text(closings[2], Column::D),
        Some("صورتخلاصه تنخواه شماره 7 طی تنخواه اقای الماسی پروژه مهر")
    );
    assert_eq!(text(closings[2], Column::X), settlement_level4(payer));
}

#[tokio::test]
async fn area_payer_without_areas_never_settles() {
    let csv = "شرح سند,مبلغ\nخرید خودکار,100\nخرید مداد,40\n";
    let sheet = compile("اقای الماسی", csv).await;

    assert_eq!(sheet.len(), 2);
    assert!(settlements(&sheet).is_empty());
}

#[tokio::test]
async fn receipt_forces_inventory_account() {
    let csv = "شرح سند,مبلغ,رسیدانبار,تاریخ\nحمل و اجاره,800,120.0,1403/02/01\n";
    let sheet = compile("اقای حقی", csv).await;

    let expense = &sheet.rows()[0];
    assert_eq!(expense.account(), Some(3120));
    assert_eq!(text(expense, Column::X), Some("200082"));
    let memo = expense.description().expect("memo");
    assert!(memo.contains("به شماره رسید انبار 120"));
    assert!(!memo.contains("مورخ"));
}

#[tokio::test]
async fn vat_attributes_sit_on_the_expense_row() {
    let csv = "شرح سند,مبلغ,ارزش افزوده\nخرید خودکار,1000,90\nخرید مداد,400,\n";
    let sheet = compile("اقای حقی", csv).await;

    let rows = sheet.rows();
    assert_eq!(text(&rows[0], Column::AO), Some(TAX_STATUS_SUBJECT));
    assert_eq!(rows[0].get(Column::AT).and_then(|v| v.as_amount()), Some(90.0));
    assert_eq!(rows[0].get(Column::AU).and_then(|v| v.as_amount()), Some(0.0));
    assert_eq!(rows[1].account(), Some(3221));
    assert_eq!(rows[1].get(Column::AO), None);

    let exempt = &rows[3];
    assert_eq!(exempt.debit(), Some(400.0));
    assert_eq!(text(exempt, Column::AO), Some(TAX_STATUS_EXEMPT));
    assert_eq!(text(exempt, Column::AP), Some(DOMESTIC_MARKER));
    assert_eq!(exempt.get(Column::AT), None);
}

#[tokio::test]
async fn turnover_pair_follows_settlement() {
    let csv = "شرح سند,مبلغ,گردش\nخرید خودکار,40,گردش\n";
    let sheet = compile("اقای حقی", csv).await;

    let rows = sheet.rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].account(), Some(3120));
    assert_eq!(rows[2].debit(), Some(40.0));
    assert_eq!(rows[3].account(), Some(3120));
    assert_eq!(rows[3].credit(), Some(40.0));
    assert_eq!(text(&rows[3], Column::X), None);
    assert_eq!(text(&rows[3], Column::Y), Some("004001"));
}

#[tokio::test]
async fn missing_columns_are_tolerated() {
    let sheet = compile("اقای حقی", "مبلغ\n250\n").await;

    let rows = sheet.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].account(), Some(7350));
    assert_eq!(
        rows[0].description(),
        Some("طی تنخواه شماره 7 اقای حقی پروژه مهر")
    );
    assert_eq!(rows[1].credit(), Some(250.0));
}

#[tokio::test]
async fn bad_amounts_count_as_zero() {
    let csv = "شرح سند,مبلغ,کارمزد\nخرید خودکار,\"1,200\",-\nخرید مداد,abc,\n";
    let sheet = compile("اقای حقی", csv).await;

    assert_eq!(settlements(&sheet), vec![1200.0, 0.0]);
}

#[tokio::test]
async fn cost_center_project_reads_level4_from_sheet() {
    let csv = "شرح سند,مبلغ,کارمزد,مرکز هزینه\nخرید خودکار,100,5,345\nخرید مداد,100,,\n";
    let sheet = PettyCashLedgerUtil::new()
        .from_string(&config("اقای حقی", "پرند"), csv)
        .await
        .expect("compile");

    let rows = sheet.rows();
    assert_eq!(text(&rows[0], Column::X), Some("000345"));
    assert_eq!(rows[1].account(), Some(7512));
    assert_eq!(text(&rows[1], Column::X), Some("005021"));
    assert_eq!(text(&rows[3], Column::X), Some("005021"));
}

#[tokio::test]
async fn blank_config_field_fails_whole_run() {
    let result = PettyCashLedgerUtil::new()
        .from_string(&config("  ", "مهر"), "مبلغ\n100\n")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn malformed_config_fails_whole_run() {
    let result = PettyCashLedgerUtil::new()
        .from_string("RunConfig(payer_name: 12)", "مبلغ\n100\n")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn reads_inputs_from_files() {
    let dir = std::env::temp_dir().join(format!("petty-cash-ledger-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let config_path = dir.join("run.ron");
    let csv_path = dir.join("expenses.csv");
    tokio::fs::write(&config_path, config("اقای حقی", "مهر")).await.unwrap();
    tokio::fs::write(&csv_path, "شرح سند,مبلغ\nخرید خودکار,100\n").await.unwrap();

    let util = PettyCashLedgerUtil::new();
    let sheet = util.from_file(&config_path, &csv_path).await.unwrap();
    assert_eq!(sheet.len(), 2);

    let csv = util.to_csv(&sheet).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.starts_with("row,C,D,H,K,P,Q,X,Y,AO,AP,AQ,AR,AS,AT,AU"));
    let json: serde_json::Value = serde_json::from_str(&util.to_json(&sheet).unwrap()).unwrap();
    assert_eq!(json[1]["cells"]["H"], 1131);
    assert!(util.preview(&sheet).contains("; --- Totals"));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
