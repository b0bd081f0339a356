use chrono::{DateTime, FixedOffset};
use objstore::{CommitId, Operation, Report, Repository, StoreConfig};
use pretty_assertions::assert_eq;

mod common;
use common::{epoch, hourly_clock};

#[test]
fn init_builds_repository_from_operations() {
    let repository = Repository::init([
        Operation::add("important", "stuff"),
        Operation::commit("test message"),
        Operation::create_branch("dev"),
        Operation::checkout_branch("dev"),
        Operation::add("slot", "mlon"),
        Operation::commit("on dev"),
    ]);

    assert_eq!(repository.manager().current_branch().name().as_ref(), "dev");
    assert_eq!(repository.head().message(), "on dev");
    assert_eq!(repository.manager().branch("master").map(|b| b.len()), Some(1));
}

#[test]
fn init_skips_failing_operations() {
    let repository = Repository::init([
        Operation::add("value", "21"),
        Operation::remove("missing"),
        Operation::checkout_branch("develop"),
        Operation::commit("message"),
    ]);

    assert_eq!(repository.manager().current_branch().name().as_ref(), "master");
    assert_eq!(repository.get("value").payload(), Some(&"21"));
}

#[test]
fn apply_all_reports_failing_operation() {
    let mut repository = Repository::<&str>::new();

    let error = repository
        .apply_all([
            Operation::create_branch("dev"),
            Operation::checkout_branch("develop"),
        ])
        .expect_err("develop does not exist");

    let chain = format!("{error:#}");
    assert!(chain.contains("operation #1 (branch checkout develop) failed"));
    assert!(chain.contains("Branch develop does not exist."));
}

#[test]
fn apply_all_continues_an_existing_repository() -> anyhow::Result<()> {
    let mut repository = Repository::new().with_clock(hourly_clock());
    repository.apply_all([Operation::add("a", 1), Operation::commit("m1")])?;
    repository.apply_all([Operation::remove("a"), Operation::commit("m2")])?;

    assert!(repository.get("a").is_error());
    assert_eq!(repository.manager().current_branch().len(), 2);
    Ok(())
}

#[test]
fn configured_initial_branch_is_current() {
    let config = StoreConfig {
        initial_branch: "main".to_string(),
        ..StoreConfig::default()
    };
    let mut repository = Repository::<i32>::with_config(config);

    assert_eq!(repository.branch().list().message(), "* main");
    assert_eq!(
        repository.log().message(),
        "Branch main does not have any commits yet."
    );
}

#[test]
fn configured_commit_date_stamps_every_commit() -> anyhow::Result<()> {
    let config = StoreConfig::from_vars(|key: &str| {
        (key == "OBJSTORE_COMMIT_DATE").then(|| "2022-01-01 00:00:00 +0000".to_string())
    })?;
    let mut repository = Repository::with_config(config);

    repository.add("a", 1).unwrap();
    let commit = repository.commit("m").unwrap().into_payload();

    assert_eq!(commit.timestamp(), epoch());
    Ok(())
}

#[test]
fn custom_addresser_names_commits() {
    let addresser = |_: &DateTime<FixedOffset>, message: &str| CommitId::new(format!("id-{message}"));
    let mut repository = Repository::new().with_addresser(addresser);

    repository.add("a", 1).unwrap();
    repository.commit("first").unwrap();

    let head = repository.head().unwrap().into_payload();
    assert_eq!(head.id().as_ref(), "id-first");
    assert_eq!(repository.checkout("id-first").message(), "HEAD is now at id-first.");
}

#[test]
fn repositories_do_not_share_state() {
    let mut first = Repository::new().with_clock(hourly_clock());
    let mut second = Repository::<i32>::new().with_clock(hourly_clock());

    first.add("a", 1).unwrap();
    first.commit("only in first").unwrap();
    second.branch().create("dev").unwrap();

    assert!(second.head().is_error());
    assert_eq!(first.branch().list().message(), "* master");
    assert_eq!(second.branch().list().message(), "  dev\n* master");
}

#[test]
fn identical_history_gives_identical_ids() {
    let build = || {
        let mut repository = Repository::new().with_clock(hourly_clock());
        repository.add("a", 1).unwrap();
        repository.commit("m").unwrap().into_payload()
    };

    assert_eq!(build().id(), build().id());
}
