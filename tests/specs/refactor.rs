//! Behavioral specs for the client → patient rename.
//!
//! Covers:
//! - Default root and explicit root
//! - Directory pruning and the extension allow-list
//! - The `use client` directive and `CLIENT Component` guards
//! - Read failures and idempotence

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Fixture tree
// =============================================================================

/// > Bare invocation rewrites `emr-portal` under the working directory
#[test]
fn rewrites_default_root() {
    let temp = Project::with_fixture("portal", "emr-portal");

    run(refactor_cmd().current_dir(temp.path()))
        .code(0)
        .stdout_eq(
            "Updated: emr-portal/app/page.tsx\n\
             Updated: emr-portal/components/ClientList.jsx\n\
             Updated: emr-portal/docs/README.md\n\
             Refactor complete.\n",
        )
        .stderr_eq("");

    similar_asserts::assert_eq!(
        temp.read("emr-portal/app/page.tsx"),
        "'use client';\n\
         \n\
         import { PatientList } from '../components/PatientList';\n\
         \n\
         export default function PatientsPage() {\n  return <PatientList />;\n}\n"
    );
    similar_asserts::assert_eq!(
        temp.read("emr-portal/components/ClientList.jsx"),
        "export function PatientList({ patients }) {\n  \
         return patients.map((patient) => <li key={patient.id}>{patient.name}</li>);\n}\n"
    );
    similar_asserts::assert_eq!(
        temp.read("emr-portal/docs/README.md"),
        "# PATIENTS\n\nEach PATIENT record is rendered by a CLIENT Component.\n"
    );
}

/// > Dependency, build and VCS directories and other extensions are left alone
#[test]
fn leaves_excluded_files_untouched() {
    let temp = Project::with_fixture("portal", "emr-portal");

    run(refactor_cmd().current_dir(temp.path())).code(0);

    assert_eq!(
        temp.read("emr-portal/node_modules/auth-client/index.js"),
        "module.exports = function client() {};\n"
    );
    assert_eq!(
        temp.read("emr-portal/.next/server/page.js"),
        "const client = {};\n"
    );
    assert_eq!(
        temp.read("emr-portal/components/theme.css"),
        ".client-card { color: teal; }\n"
    );
}

/// > Running twice changes nothing the second time
#[test]
fn second_run_is_a_no_op() {
    let temp = Project::with_fixture("portal", "emr-portal");

    run(refactor_cmd().current_dir(temp.path())).code(0);
    let after_first = temp.read("emr-portal/app/page.tsx");

    run(refactor_cmd().current_dir(temp.path()))
        .code(0)
        .stdout_eq("Refactor complete.\n");
    assert_eq!(temp.read("emr-portal/app/page.tsx"), after_first);
}

// =============================================================================
// Root selection
// =============================================================================

/// > A positional ROOT overrides the default
#[test]
fn explicit_root_argument() {
    let temp = Project::empty();
    temp.file("web/a.md", "Clients\n");

    run(refactor_cmd().arg("web").current_dir(temp.path()))
        .code(0)
        .stdout_eq("Updated: web/a.md\nRefactor complete.\n");
    assert_eq!(temp.read("web/a.md"), "Patients\n");
}

/// > REWORD_ROOT sets the root when no argument is given
#[test]
fn env_root_sets_path() {
    let temp = Project::empty();
    temp.file("site/a.ts", "CLIENT data");

    run(refactor_cmd()
        .current_dir(temp.path())
        .env("REWORD_ROOT", "site"))
    .code(0)
    .stdout_has("Updated: site/a.ts");
    assert_eq!(temp.read("site/a.ts"), "PATIENT data");
}

/// > A missing root is not an error; nothing is updated
#[test]
fn missing_root_succeeds_quietly() {
    let temp = Project::empty();

    run(refactor_cmd().current_dir(temp.path()))
        .code(0)
        .stdout_eq("Refactor complete.\n")
        .stderr_eq("");
}

// =============================================================================
// Guards and failures
// =============================================================================

/// > `use client` directives survive; CLIENT Component survives
#[test]
fn guarded_phrases_survive() {
    let temp = Project::empty();
    temp.file("emr-portal/a.tsx", "\"use client\";\n");
    temp.file("emr-portal/b.md", "CLIENT Component\n");

    run(refactor_cmd().current_dir(temp.path()))
        .code(0)
        .stdout_eq("Refactor complete.\n");
    assert_eq!(temp.read("emr-portal/a.tsx"), "\"use client\";\n");
    assert_eq!(temp.read("emr-portal/b.md"), "CLIENT Component\n");
}

/// > A file that is not valid UTF-8 is reported and skipped
#[test]
fn unreadable_file_is_reported_and_skipped() {
    let temp = Project::empty();
    std::fs::create_dir_all(temp.path().join("emr-portal")).unwrap();
    std::fs::write(temp.path().join("emr-portal/a.json"), [0xff, 0xfe, 0x00]).unwrap();
    temp.file("emr-portal/b.ts", "client");

    run(refactor_cmd().current_dir(temp.path()))
        .code(0)
        .stdout_eq("Updated: emr-portal/b.ts\nRefactor complete.\n")
        .stderr_has("Could not read emr-portal/a.json: ");
}

/// > --verbose prints a summary to stderr
#[test]
fn verbose_prints_summary() {
    let temp = Project::with_fixture("portal", "emr-portal");

    run(refactor_cmd().arg("-v").current_dir(temp.path()))
        .code(0)
        .stderr_has("[verbose] files updated: 3")
        .stderr_has("[verbose] directories skipped: 2");
}
