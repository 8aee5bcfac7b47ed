use ioc_common::{with_global_catalog, TypeKey};
use ioc_macros::{interface, Bean};

#[interface(implementation = Loud)]
pub trait Speaker: Send + Sync {
    fn speak(&self) -> &'static str;
}

#[derive(Default, Bean)]
#[bean(implements(dyn Speaker))]
struct Loud;

impl Speaker for Loud {
    fn speak(&self) -> &'static str {
        "HELLO"
    }
}

fn main() {
    let chosen = with_global_catalog(|catalog| {
        catalog.interface_override(&TypeKey::of::<dyn Speaker>())
    });
    assert_eq!(chosen, Some(TypeKey::of::<Loud>()));
    assert_eq!(Loud.speak(), "HELLO");
}
