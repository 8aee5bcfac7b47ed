use ioc_common::{Bean, Inject, Stereotype};
use ioc_macros::Bean;

pub trait Store: Send + Sync {}

#[derive(Default, Bean)]
#[bean(repository, implements(dyn Store))]
struct FileStore;

impl Store for FileStore {}

#[derive(Default, Bean)]
#[bean(service)]
struct Indexer {
    #[inject]
    store: Inject<dyn Store>,
    #[inject(implementation = FileStore)]
    backup: Inject<dyn Store>,
    label: String,
}

fn main() {
    assert_eq!(<FileStore as Bean>::stereotype(), Stereotype::Repository);
    assert_eq!(<Indexer as Bean>::injection_points().len(), 2);
    let indexer = Indexer::create().unwrap();
    assert!(!indexer.store.is_wired());
    assert!(!indexer.backup.is_wired());
    assert!(indexer.label.is_empty());
}
