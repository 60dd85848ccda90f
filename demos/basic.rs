use mapdump::{Mapping, ToMapping, Value};

struct Test;

impl ToMapping for Test {
    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("hello".to_string(), vec![1, 2, 3].into());
        mapping
    }
}

struct Test2;

impl ToMapping for Test2 {
    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("nested".to_string(), Value::convertible(Test));
        mapping
    }
}

fn main() {
    color_eyre::install().unwrap();

    let value = Value::convertible(Test2);

    println!("{}", mapdump::to_json(&value).unwrap());
    println!("{}", mapdump::to_yaml(&value).unwrap());
}
