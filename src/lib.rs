pub mod app_dirs;
pub mod entry;
pub mod error;
pub mod fsutils;
pub mod games;
pub mod launcher;
pub mod picker;
pub mod scanner;
pub mod store;
pub mod ui;

use std::path::PathBuf;

use log::info;
use rand::Rng;

use entry::Entry;
use error::GameRollError;
use games::{AddMode, GameList};
use launcher::Launcher;
use scanner::Scanner;
use store::Store;

pub type Result<T> = std::result::Result<T, GameRollError>;

/// One editing session over the saved game list. Every change is written
/// back to the store before the call returns.
pub struct Session<R, L> {
    store: Store,
    scanner: Scanner,
    scan_dirs: Vec<PathBuf>,
    games: GameList,
    rng: R,
    launcher: L,
    last_rolled: Option<Entry>,
}

impl<R: Rng, L: Launcher> Session<R, L> {
    /// Loads the saved list, or seeds it from a scan when there is none.
    pub fn open(
        store: Store,
        scanner: Scanner,
        scan_dirs: Vec<PathBuf>,
        rng: R,
        launcher: L,
    ) -> Result<Self> {
        let games = GameList::new(store.load());
        let mut session = Session {
            store,
            scanner,
            scan_dirs,
            games,
            rng,
            launcher,
            last_rolled: None,
        };
        if session.games.is_empty() {
            let scanned = session.scanner.scan(&session.scan_dirs);
            let added = session.games.merge(scanned);
            info!("seeded game list with {added} scanned item(s)");
            session.save()?;
        }
        Ok(session)
    }

    pub fn games(&self) -> &GameList {
        &self.games
    }

    pub fn last_rolled(&self) -> Option<&Entry> {
        self.last_rolled.as_ref()
    }

    fn save(&self) -> Result<()> {
        self.store.save(self.games.entries())
    }

    /// Adds newly found games from the scan directories.
    pub fn rescan(&mut self) -> Result<usize> {
        let scanned = self.scanner.scan(&self.scan_dirs);
        let added = self.games.merge(scanned);
        self.save()?;
        Ok(added)
    }

    pub fn add_paths(&mut self, paths: &[PathBuf], mode: AddMode) -> Result<usize> {
        let added = self.games.add_paths(paths, mode, &self.scanner);
        if added > 0 {
            self.save()?;
        }
        Ok(added)
    }

    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        let removed = self
            .games
            .remove(index)
            .ok_or(GameRollError::InvalidIndex(index))?;
        self.save()?;
        Ok(removed)
    }

    pub fn remove_missing(&mut self) -> Result<Vec<Entry>> {
        let missing = self.games.remove_missing();
        if !missing.is_empty() {
            self.save()?;
        }
        Ok(missing)
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let included = self
            .games
            .toggle(index)
            .ok_or(GameRollError::InvalidIndex(index))?;
        self.save()?;
        Ok(included)
    }

    pub fn set_all_included(&mut self, included: bool) -> Result<()> {
        self.games.set_all_included(included);
        self.save()
    }

    /// Picks a new game. Nothing included clears the previous roll.
    pub fn roll(&mut self) -> Option<&Entry> {
        self.last_rolled = picker::pick(self.games.entries(), &mut self.rng).cloned();
        self.last_rolled.as_ref()
    }

    /// Launches the last roll, rolling first when there is none yet.
    pub fn run(&mut self) -> Result<Option<Entry>> {
        if self.last_rolled.is_none() {
            self.roll();
        }
        self.launch_last()
    }

    pub fn roll_and_run(&mut self) -> Result<Option<Entry>> {
        self.roll();
        self.launch_last()
    }

    fn launch_last(&self) -> Result<Option<Entry>> {
        match &self.last_rolled {
            Some(entry) => {
                self.launcher.launch(entry)?;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    pub fn close(self) -> Result<()> {
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, fs, io};

    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::{tempdir, TempDir};

    #[derive(Default)]
    struct RecordingLauncher {
        launched: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl Launcher for &RecordingLauncher {
        fn launch(&self, entry: &Entry) -> Result<()> {
            if self.fail {
                return Err(GameRollError::Launch {
                    name: entry.name.clone(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
                });
            }
            self.launched.borrow_mut().push(entry.path.clone());
            Ok(())
        }
    }

    struct Fixture {
        dir: TempDir,
        desktop: PathBuf,
        store: Store,
    }

    impl Fixture {
        fn new(games: &[&str]) -> Self {
            let dir = tempdir().unwrap();
            let desktop = dir.path().join("Desktop");
            fs::create_dir(&desktop).unwrap();
            for game in games {
                fs::write(desktop.join(game), "").unwrap();
            }
            let store = Store::new(dir.path().join("data").join("games.json"));
            Fixture {
                dir,
                desktop,
                store,
            }
        }

        fn open<'a>(&self, launcher: &'a RecordingLauncher) -> Session<StdRng, &'a RecordingLauncher> {
            Session::open(
                self.store.clone(),
                Scanner::default(),
                vec![self.desktop.clone()],
                StdRng::seed_from_u64(5),
                launcher,
            )
            .unwrap()
        }
    }

    #[test]
    fn first_open_scans_and_saves() {
        let fixture = Fixture::new(&["doom.exe", "quake.lnk", "notes.txt"]);
        let launcher = RecordingLauncher::default();
        let session = fixture.open(&launcher);

        assert_eq!(session.games().len(), 2);
        assert_eq!(fixture.store.load(), session.games().entries());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn first_open_survives_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let fixture = Fixture::new(&["doom.exe"]);
        let odd = fixture.desktop.join(OsStr::from_bytes(b"caf\xe9.exe"));
        fs::write(&odd, "").unwrap();
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);

        assert_eq!(session.games().len(), 1);
        assert_eq!(fixture.store.load()[0].name, "doom");
        assert_eq!(session.add_paths(&[odd], AddMode::Picked).unwrap(), 0);
        assert_eq!(session.rescan().unwrap(), 0);
    }

    #[test]
    fn saved_list_wins_over_scan() {
        let fixture = Fixture::new(&["doom.exe", "quake.lnk"]);
        let saved = vec![Entry::from_path(&fixture.dir.path().join("elsewhere.exe"))];
        fixture.store.save(&saved).unwrap();
        let launcher = RecordingLauncher::default();

        let session = fixture.open(&launcher);
        assert_eq!(session.games().entries(), saved.as_slice());
    }

    #[test]
    fn rescan_adds_only_new_games_and_persists() {
        let fixture = Fixture::new(&["doom.exe"]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);
        fs::write(fixture.desktop.join("quake.lnk"), "").unwrap();

        assert_eq!(session.rescan().unwrap(), 1);
        assert_eq!(session.rescan().unwrap(), 0);
        assert_eq!(fixture.store.load().len(), 2);
    }

    #[test]
    fn mutations_are_persisted() {
        let fixture = Fixture::new(&["a.exe", "b.exe", "c.exe"]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);

        assert!(!session.toggle(0).unwrap());
        assert_eq!(session.remove(2).unwrap().name, "c");
        assert!(matches!(session.toggle(9), Err(GameRollError::InvalidIndex(9))));
        let saved = fixture.store.load();
        assert_eq!(saved.len(), 2);
        assert!(!saved[0].included);

        session.set_all_included(false).unwrap();
        assert!(fixture.store.load().iter().all(|e| !e.included));

        fs::remove_file(fixture.desktop.join("b.exe")).unwrap();
        let missing = session.remove_missing().unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(fixture.store.load().len(), 1);
    }

    #[test]
    fn nothing_included_rolls_nothing_and_launches_nothing() {
        let fixture = Fixture::new(&["a.exe", "b.exe"]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);
        assert!(session.roll().is_some());

        session.set_all_included(false).unwrap();
        assert!(session.roll().is_none());
        assert!(session.last_rolled().is_none());
        assert!(session.run().unwrap().is_none());
        assert!(session.roll_and_run().unwrap().is_none());
        assert!(launcher.launched.borrow().is_empty());
    }

    #[test]
    fn run_reuses_last_roll() {
        let fixture = Fixture::new(&["a.exe", "b.exe", "c.exe", "d.exe"]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);

        let first = session.run().unwrap().unwrap();
        for _ in 0..5 {
            assert_eq!(session.run().unwrap().unwrap(), first);
        }
        assert_eq!(launcher.launched.borrow().len(), 6);
        assert!(launcher.launched.borrow().iter().all(|p| *p == first.path));
    }

    #[test]
    fn roll_and_run_rerolls_every_time() {
        let fixture = Fixture::new(&["a.exe", "b.exe", "c.exe", "d.exe"]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);

        for _ in 0..40 {
            let launched = session.roll_and_run().unwrap().unwrap();
            assert_eq!(session.last_rolled(), Some(&launched));
        }
        let mut distinct = launcher.launched.borrow().clone();
        distinct.sort();
        distinct.dedup();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn launch_failure_is_reported_and_not_fatal() {
        let fixture = Fixture::new(&["a.exe"]);
        let launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        let mut session = fixture.open(&launcher);

        let err = session.roll_and_run().unwrap_err();
        assert_eq!(err.to_string(), "failed to launch 'a': access denied");
        assert_eq!(session.last_rolled().unwrap().name, "a");
        assert_eq!(session.rescan().unwrap(), 0);
    }

    #[test]
    fn dropped_files_are_vetted() {
        let fixture = Fixture::new(&[]);
        let launcher = RecordingLauncher::default();
        let mut session = fixture.open(&launcher);
        let steam = fixture.dir.path().join("portal.url");
        let web = fixture.dir.path().join("site.url");
        fs::write(&steam, "URL=steam://rungameid/400\n").unwrap();
        fs::write(&web, "URL=https://example.com\n").unwrap();

        let added = session
            .add_paths(&[steam.clone(), web, steam], AddMode::Dropped)
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(fixture.store.load()[0].name, "portal");
    }
}
