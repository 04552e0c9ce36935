mod testkit;
