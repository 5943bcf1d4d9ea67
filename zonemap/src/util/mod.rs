pub mod table_ops;
